// File: src/catalog.rs
use crate::core::engine::DEFAULT_DISEASE;
use crate::dataset::{cell, cells_from, for_each_row};
use crate::error::Result;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

pub const DESCRIPTION_FILE: &str = "description.csv";
pub const PRECAUTIONS_FILE: &str = "precautions.csv";
pub const MEDICATIONS_FILE: &str = "medications.csv";
pub const DIETS_FILE: &str = "diets.csv";
pub const WORKOUT_FILE: &str = "workout.csv";

/// Names predictors emit that are filed under a different name in the sheets.
const ALIASES: &[(&str, &str)] = &[("Peptic ulcer diseae", "Peptic ulcer disease")];

struct BuiltinAdvice {
    disease: &'static str,
    description: &'static str,
    precautions: &'static [&'static str],
    medications: &'static [&'static str],
    diets: &'static [&'static str],
    workouts: &'static [&'static str],
}

/// Advice for diseases the fallback predictors emit. Takes precedence over the sheets.
const BUILTIN_ADVICE: &[BuiltinAdvice] = &[
    BuiltinAdvice {
        disease: "Viral Infection",
        description: "A viral infection is a illness caused by a virus. Common symptoms include fever, \
                      fatigue, and body aches. Most viral infections resolve on their own with rest and \
                      supportive care.",
        precautions: &[
            "Get plenty of rest",
            "Stay hydrated",
            "Use over-the-counter pain relievers",
            "Avoid contact with others to prevent spreading",
        ],
        medications: &["Acetaminophen", "Ibuprofen", "Antiviral medications (if prescribed)"],
        diets: &["Drink plenty of fluids", "Eat light, nutritious meals", "Include vitamin C rich foods"],
        workouts: &["Rest completely until symptoms improve", "Gradual return to normal activities"],
    },
    BuiltinAdvice {
        disease: DEFAULT_DISEASE,
        description: "The common cold is a viral infection of your nose and throat (upper respiratory \
                      tract). It's usually harmless, although it might not feel that way.",
        precautions: &[
            "Wash hands frequently",
            "Avoid close contact with sick individuals",
            "Disinfect surfaces",
            "Stay hydrated",
        ],
        medications: &["Decongestants", "Antihistamines", "Pain relievers", "Cough suppressants"],
        diets: &["Warm fluids like tea or soup", "Honey", "Vitamin C rich foods", "Chicken soup"],
        workouts: &["Light activities if feeling well", "Rest if experiencing severe symptoms"],
    },
    BuiltinAdvice {
        disease: "Viral Respiratory Infection",
        description: "A viral respiratory infection affects the nose, throat, or lungs. These infections \
                      are common and usually resolve on their own within a week or two.",
        precautions: &[
            "Cover mouth when coughing or sneezing",
            "Wash hands frequently",
            "Avoid touching face",
            "Stay home when sick",
        ],
        medications: &["Cough syrup", "Decongestants", "Pain relievers", "Throat lozenges"],
        diets: &["Warm liquids", "Honey and lemon tea", "Clear broths", "Soft foods"],
        workouts: &["Rest until symptoms subside", "Avoid strenuous activities"],
    },
    BuiltinAdvice {
        disease: "Sinusitis",
        description: "Sinusitis is an inflammation or swelling of the tissue lining the sinuses. Common \
                      symptoms include nasal congestion, facial pain, and headache.",
        precautions: &[
            "Use a humidifier",
            "Avoid allergens",
            "Stay hydrated",
            "Practice good nasal hygiene",
        ],
        medications: &["Decongestants", "Nasal corticosteroids", "Saline nasal sprays", "Pain relievers"],
        diets: &["Anti-inflammatory foods", "Plenty of water", "Warm liquids", "Spicy foods to clear sinuses"],
        workouts: &["Light activities if feeling well", "Avoid activities that increase head pressure"],
    },
];

impl BuiltinAdvice {
    fn to_advice(&self) -> DiseaseAdvice {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        DiseaseAdvice {
            description: Some(self.description.to_string()),
            precautions: owned(self.precautions),
            medications: owned(self.medications),
            diets: owned(self.diets),
            workouts: owned(self.workouts),
        }
    }
}

/// Patient-facing advice for one disease.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiseaseAdvice {
    pub description: Option<String>,
    pub precautions: Vec<String>,
    pub medications: Vec<String>,
    pub diets: Vec<String>,
    pub workouts: Vec<String>,
}

impl DiseaseAdvice {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.precautions.is_empty()
            && self.medications.is_empty()
            && self.diets.is_empty()
            && self.workouts.is_empty()
    }
}

/// Advice keyed by trimmed disease name.
#[derive(Debug, Clone, Default)]
pub struct DiseaseCatalog {
    entries: HashMap<String, DiseaseAdvice>,
}

impl DiseaseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every advice sheet found in `dir`. Missing sheets leave their
    /// section empty.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::new();
        if let Some(reader) = open_optional(&dir.join(DESCRIPTION_FILE))? {
            catalog.read_descriptions(reader)?;
        }
        if let Some(reader) = open_optional(&dir.join(PRECAUTIONS_FILE))? {
            catalog.read_precautions(reader)?;
        }
        if let Some(reader) = open_optional(&dir.join(MEDICATIONS_FILE))? {
            catalog.read_list_sheet(reader, |advice| &mut advice.medications)?;
        }
        if let Some(reader) = open_optional(&dir.join(DIETS_FILE))? {
            catalog.read_list_sheet(reader, |advice| &mut advice.diets)?;
        }
        if let Some(reader) = open_optional(&dir.join(WORKOUT_FILE))? {
            catalog.read_workouts(reader)?;
        }
        tracing::info!(diseases = catalog.entries.len(), "advice catalog loaded");
        Ok(catalog)
    }

    // In the description, precaution and list sheets only the first row for a
    // disease counts.

    /// `Disease, Description`
    pub fn read_descriptions<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut seen = HashSet::new();
        for_each_row(reader, |_, row| {
            if let (Some(disease), Some(text)) = (cell(row, 0), cell(row, 1)) {
                if seen.insert(disease.to_string()) {
                    self.entry(disease).description = Some(text.to_string());
                }
            }
        })
    }

    /// `index, Disease, Precaution_1, ..., Precaution_n`
    pub fn read_precautions<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut seen = HashSet::new();
        for_each_row(reader, |_, row| {
            let Some(disease) = cell(row, 1) else { return };
            if seen.insert(disease.to_string()) {
                self.entry(disease).precautions = cells_from(row, 2);
            }
        })
    }

    /// `Disease, ['item', 'item', ...]`, used by the medication and diet sheets.
    pub fn read_list_sheet<R, F>(&mut self, reader: R, section: F) -> Result<()>
    where
        R: Read,
        F: Fn(&mut DiseaseAdvice) -> &mut Vec<String>,
    {
        let mut seen = HashSet::new();
        for_each_row(reader, |_, row| {
            if let (Some(disease), Some(list)) = (cell(row, 0), cell(row, 1)) {
                if seen.insert(disease.to_string()) {
                    *section(self.entry(disease)) = parse_list_literal(list);
                }
            }
        })
    }

    /// `index, index, disease, workout`; one row per workout item.
    pub fn read_workouts<R: Read>(&mut self, reader: R) -> Result<()> {
        for_each_row(reader, |_, row| {
            if let (Some(disease), Some(workout)) = (cell(row, 2), cell(row, 3)) {
                self.entry(disease).workouts.push(workout.to_string());
            }
        })
    }

    fn entry(&mut self, disease: &str) -> &mut DiseaseAdvice {
        self.entries.entry(disease.trim().to_string()).or_default()
    }

    /// Advice for a predicted disease. The trimmed name is checked against the
    /// built-in advice first, then looked up in the sheets through the alias table.
    pub fn advice_for(&self, disease: &str) -> Option<DiseaseAdvice> {
        let trimmed = disease.trim();
        if let Some(builtin) = BUILTIN_ADVICE.iter().find(|b| b.disease == trimmed) {
            return Some(builtin.to_advice());
        }
        self.entries
            .get(canonical_name(trimmed))
            .filter(|advice| !advice.is_empty())
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn canonical_name(disease: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == disease)
        .map_or(disease, |(_, canonical)| *canonical)
}

fn open_optional(path: &Path) -> Result<Option<BufReader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "advice sheet not present");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Parses a list literal such as `['a', "b, c", d]` into its items. Commas
/// inside quotes belong to the item. A cell that is not a well-formed list is
/// kept whole as a single item.
pub fn parse_list_literal(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let whole = || if raw.is_empty() { vec![] } else { vec![raw.to_string()] };
    let Some(body) = raw.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) else {
        return whole();
    };

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) if c == '\\' => current.extend(chars.next()),
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => quote = Some(c),
                ',' => push_item(&mut items, &mut current),
                _ => current.push(c),
            },
        }
    }
    if quote.is_some() {
        return whole();
    }
    push_item(&mut items, &mut current);
    items
}

fn push_item(items: &mut Vec<String>, current: &mut String) {
    let item = current.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
    current.clear();
}
