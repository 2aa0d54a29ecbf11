// src/core/specialist.rs

pub const DEFAULT_SPECIALIST: &str = "General Physician";

/// Disease -> specialist. Keys must match dataset disease names exactly.
const SPECIALISTS: &[(&str, &str)] = &[
    // Fever and general symptoms
    ("Fungal infection", "Dermatologist"),
    ("Allergy", "Allergist"),
    ("Common Cold", "General Physician"),
    ("Malaria", "General Physician"),
    ("Dengue", "General Physician"),
    ("Typhoid", "General Physician"),
    ("Chicken pox", "General Physician"),
    ("AIDS", "Infectious Disease Specialist"),
    ("Tuberculosis", "Pulmonologist"),
    ("hepatitis A", "Hepatologist"),
    ("Hepatitis B", "Hepatologist"),
    ("Hepatitis C", "Hepatologist"),
    ("Hepatitis D", "Hepatologist"),
    ("Hepatitis E", "Hepatologist"),
    ("Alcoholic hepatitis", "Hepatologist"),
    // Heart
    ("Heart attack", "Cardiologist"),
    ("Hypertension", "Cardiologist"),
    ("Bradycardia", "Cardiologist"),
    ("Tachycardia", "Cardiologist"),
    // Digestive and endocrine
    ("GERD", "Gastroenterologist"),
    ("Chronic cholestasis", "Gastroenterologist"),
    ("Peptic ulcer disease", "Gastroenterologist"),
    ("Gastroenteritis", "Gastroenterologist"),
    ("Jaundice", "Gastroenterologist"),
    ("Diabetes", "Endocrinologist"),
    ("Hyperthyroidism", "Endocrinologist"),
    ("Hypothyroidism", "Endocrinologist"),
    ("Hypoglycemia", "Endocrinologist"),
    // Respiratory
    ("Bronchial Asthma", "Pulmonologist"),
    ("Pneumonia", "Pulmonologist"),
    // Neurological
    ("Migraine", "Neurologist"),
    ("Cervical spondylosis", "Orthopedist"),
    ("Paralysis (brain hemorrhage)", "Neurologist"),
    ("(vertigo) Paroymsal  Positional Vertigo", "ENT Specialist"),
    // Musculoskeletal
    ("Osteoarthristis", "Orthopedist"),
    ("Arthritis", "Rheumatologist"),
    // Skin
    ("Acne", "Dermatologist"),
    ("Impetigo", "Dermatologist"),
    ("Psoriasis", "Dermatologist"),
    // Other
    ("Urinary tract infection", "Urologist"),
    ("Dimorphic hemmorhoids(piles)", "Proctologist"),
    ("Depression", "Psychiatrist"),
    ("Anxiety", "Psychiatrist"),
];

/// Specialist for a disease. Case-sensitive exact lookup; absent, blank and
/// unmapped names all get `DEFAULT_SPECIALIST`.
pub fn doctor_for(disease: Option<&str>) -> &'static str {
    let Some(disease) = disease.filter(|d| !d.trim().is_empty()) else {
        return DEFAULT_SPECIALIST;
    };
    SPECIALISTS
        .iter()
        .find(|(name, _)| *name == disease)
        .map(|(_, specialist)| *specialist)
        .unwrap_or(DEFAULT_SPECIALIST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_diseases() {
        assert_eq!(doctor_for(Some("Migraine")), "Neurologist");
        assert_eq!(doctor_for(Some("GERD")), "Gastroenterologist");
        assert_eq!(doctor_for(Some("(vertigo) Paroymsal  Positional Vertigo")), "ENT Specialist");
    }

    #[test]
    fn absent_or_blank_defaults() {
        assert_eq!(doctor_for(None), "General Physician");
        assert_eq!(doctor_for(Some("")), "General Physician");
        assert_eq!(doctor_for(Some("   ")), "General Physician");
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(doctor_for(Some("Unheard-of syndrome")), "General Physician");
        assert_eq!(doctor_for(Some("migraine")), "General Physician");
        assert_eq!(doctor_for(Some("Migraine ")), "General Physician");
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        for (i, (a, _)) in SPECIALISTS.iter().enumerate() {
            assert!(
                SPECIALISTS[i + 1..].iter().all(|(b, _)| a != b),
                "duplicate specialist entry for {a:?}"
            );
        }
    }
}
