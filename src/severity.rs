//! Severity classification for interaction descriptions.
//!
//! Maps free text onto a fixed tier set by prioritized keyword containment.
//! A description may mention several reactions ("nausea" alongside "cardiac
//! arrest"); the worst matching tier always wins, so tiers are tested in
//! strict Severe → Moderate → Mild order. Matching is plain substring
//! containment over the case-folded text, behind [`classify`] so the
//! matcher can be swapped without touching the index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Clinical urgency tier of a documented interaction.
///
/// Declared in ascending urgency so the derived ordering ranks
/// `Unknown < Mild < Moderate < Severe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No recognized reaction phrase in the description.
    Unknown,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Life-threatening reactions.
const SEVERE_KEYWORDS: &[&str] = &[
    "anaphylaxis",
    "cardiac arrest",
    "coma",
    "stroke",
    "renal failure",
    "hepatic failure",
    "respiratory failure",
    "multi-organ failure",
    "septic shock",
    "brain hemorrhage",
    "acute myocardial infarction",
    "cardiac tamponade",
    "torsades de pointes",
    "ventricular fibrillation",
    "ventricular tachycardia",
    "cardiogenic shock",
    "status epilepticus",
    "angioedema",
    "pancytopenia",
    "pulmonary embolism",
    "respiratory arrest",
    "hepatotoxicity",
    "encephalopathy",
    "sudden cardiac death",
    "stevens-johnson syndrome",
    "toxic epidermal necrolysis",
    "liver necrosis",
    "severe qt prolongation",
    "lactic acidosis",
    "hemorrhagic stroke",
    "disseminated intravascular coagulation",
    "dic",
    "acute liver failure",
    "irreversible neuropathy",
    "intracranial hemorrhage",
    "severe arrhythmia",
    "acute pancreatitis",
    "bone marrow suppression",
    "acute respiratory distress syndrome",
    "ards",
    "rhabdomyolysis",
    "intubation required",
    "tracheal obstruction",
    "cardiac ischemia",
    "severe leukopenia",
    "ischemic stroke",
    "neuroleptic malignant syndrome",
    "serotonin syndrome",
    "hepatomegaly",
    "fulminant hepatitis",
    "sudden collapse",
    "life-threatening bleeding",
    "hemodynamic instability",
    "gangrene",
    "paralysis",
    "shock",
];

/// Reactions that need monitoring or a dose change, not an emergency room.
const MODERATE_KEYWORDS: &[&str] = &[
    "qt prolongation",
    "hypokalemia",
    "hyperkalemia",
    "neutropenia",
    "anemia",
    "thrombocytopenia",
    "hypertension",
    "hypotension",
    "mild renal impairment",
    "cns depression",
    "bradycardia",
    "tachycardia",
    "hepatotoxicity",
    "moderate pain",
    "abnormal ecg",
    "dizziness",
    "sedation",
    "tremor",
    "palpitations",
    "lightheadedness",
    "blurred vision",
    "visual disturbances",
    "confusion",
    "arrhythmia",
    "elevated liver enzymes",
    "fatigue",
    "drug toxicity",
    "inr elevation",
    "hyperbilirubinemia",
    "cns toxicity",
    "neuropathy",
    "mild gi bleeding",
    "elevated creatinine",
    "urinary retention",
    "electrolyte imbalance",
    "dry mouth",
    "muscle cramps",
    "insomnia",
    "agitation",
    "hallucinations",
    "ataxia",
    "depression",
    "weight loss",
    "increased blood glucose",
    "urinary frequency",
    "dyspnea",
    "mild hematuria",
    "prolonged bleeding time",
    "photosensitivity",
    "elevated inr",
    "altered mental status",
    "abnormal wbc count",
    "libido changes",
    "lactation changes",
];

/// Self-limiting discomfort.
const MILD_KEYWORDS: &[&str] = &[
    "nausea",
    "vomiting",
    "headache",
    "dizziness",
    "fatigue",
    "dry mouth",
    "sore throat",
    "sneezing",
    "cough",
    "runny nose",
    "itching",
    "rash",
    "diarrhea",
    "constipation",
    "back pain",
    "joint pain",
    "abdominal pain",
    "insomnia",
    "restlessness",
    "nasal congestion",
    "eye irritation",
    "increased appetite",
    "decreased appetite",
    "flatulence",
    "belching",
    "hiccups",
    "blurred vision",
    "sweating",
    "taste change",
    "tingling",
    "metallic taste",
    "hot flashes",
    "transient pain",
    "muscle ache",
    "skin dryness",
    "flushing",
    "mild fever",
    "injection site swelling",
    "irritability",
    "mild burning sensation",
    "urticaria",
    "mild anxiety",
    "tremors",
    "indigestion",
    "epigastric pain",
    "nasal dryness",
    "scalp irritation",
    "mild urination pain",
    "chills",
    "oral ulcers",
    "dryness of eyes",
    "mild malaise",
    "tearing",
    "headache upon waking",
    "sleepiness",
    "frequent yawning",
    "muscle tightness",
    "light pain on movement",
];

/// Hedging phrases the source data uses where no reaction is documented.
/// Matching one classifies `Unknown`, the same tier an unmatched
/// description falls into.
const UNKNOWN_KEYWORDS: &[&str] = &[
    "interaction unknown",
    "mechanism unclear",
    "risk not well defined",
    "effect unpredictable",
    "non-clinical studies indicate risk",
    "not evaluated",
    "rare case reports suggest interaction",
    "potentially clinically significant",
    "monitor patient closely",
    "unknown frequency",
    "undocumented",
];

/// Tier keyword tables in evaluation order, worst first.
const KEYWORD_TIERS: &[(Severity, &[&str])] = &[
    (Severity::Severe, SEVERE_KEYWORDS),
    (Severity::Moderate, MODERATE_KEYWORDS),
    (Severity::Mild, MILD_KEYWORDS),
    (Severity::Unknown, UNKNOWN_KEYWORDS),
];

/// Classify an interaction description into a severity tier.
///
/// Total over all inputs: every string yields exactly one tier, with
/// `Unknown` as the fallback when nothing matches.
pub fn classify(description: &str) -> Severity {
    let text = description.to_lowercase();
    for (tier, keywords) in KEYWORD_TIERS {
        if keywords.iter().any(|kw| text.contains(kw)) {
            return *tier;
        }
    }
    Severity::Unknown
}
