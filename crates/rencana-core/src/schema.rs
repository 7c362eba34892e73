//! Response schemas for the three stages.
//!
//! These are the shape contracts: field names and cardinalities here must
//! match the `*Draft` / `LessonPlanDocument` types the pipeline decodes into.
//! Type names follow the Gemini schema dialect (upper case).

use crate::constants::OBJECTIVES_PER_STANDARD;
use crate::vocab::{
    CharacterValue, LearningModel, LearningStrategy, ProfileDimension, TeachingMethod,
    WorksheetFieldType,
};
use serde_json::{Value, json};

fn string() -> Value {
    json!({"type": "STRING"})
}

fn string_list() -> Value {
    json!({"type": "ARRAY", "items": string()})
}

fn enum_list(labels: &[&str]) -> Value {
    json!({"type": "ARRAY", "items": {"type": "STRING", "enum": labels}})
}

fn timed_activity() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "description": string(),
            "alokasiWaktuMenit": {"type": "NUMBER"}
        },
        "required": ["description", "alokasiWaktuMenit"]
    })
}

/// Stage 1: exactly six objective drafts for one standard.
pub fn objectives_schema() -> Value {
    json!({
        "type": "ARRAY",
        "minItems": OBJECTIVES_PER_STANDARD,
        "maxItems": OBJECTIVES_PER_STANDARD,
        "items": {
            "type": "OBJECT",
            "properties": {
                "kontenPembelajaran": string(),
                "kompetensi": string(),
                "materiPokok": string(),
                "tujuanPembelajaran": string()
            },
            "required": ["kontenPembelajaran", "kompetensi", "materiPokok", "tujuanPembelajaran"]
        }
    })
}

/// Stage 2: one sequence draft per objective.
///
/// `tujuanPembelajaran` is restricted to the given objective texts so each
/// entry can be joined back to its objective in Stage 3.
pub fn sequence_schema(objectives: &[&str]) -> Value {
    let mut allowed: Vec<&str> = Vec::with_capacity(objectives.len());
    for text in objectives {
        if !allowed.contains(text) {
            allowed.push(text);
        }
    }

    json!({
        "type": "ARRAY",
        "minItems": objectives.len(),
        "maxItems": objectives.len(),
        "items": {
            "type": "OBJECT",
            "properties": {
                "tujuanPembelajaran": {"type": "STRING", "enum": allowed},
                "indikator": string(),
                "materiPokok": string(),
                "nilaiKBC": enum_list(&CharacterValue::labels()),
                "alokasiWaktu": string(),
                "dimensiProfilLulusan": enum_list(&ProfileDimension::labels()),
                "asesmen": string(),
                "sumberBelajar": string()
            },
            "required": [
                "tujuanPembelajaran",
                "indikator",
                "materiPokok",
                "nilaiKBC",
                "alokasiWaktu",
                "dimensiProfilLulusan",
                "asesmen",
                "sumberBelajar"
            ]
        }
    })
}

/// Stage 3: the full lesson plan document.
pub fn plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "identitas": {
                "type": "OBJECT",
                "properties": {
                    "namaMadrasah": string(),
                    "namaGuru": string(),
                    "mataPelajaran": string(),
                    "fase": string(),
                    "semester": string(),
                    "alokasiWaktu": string(),
                    "materiPelajaran": string(),
                    "dimensiProfilLulusan": enum_list(&ProfileDimension::labels()),
                    "pokokMateri": string()
                },
                "required": [
                    "namaMadrasah", "namaGuru", "mataPelajaran", "fase", "semester",
                    "alokasiWaktu", "materiPelajaran", "dimensiProfilLulusan", "pokokMateri"
                ]
            },
            "desainPembelajaran": {
                "type": "OBJECT",
                "properties": {
                    "capaianPembelajaran": string_list(),
                    "lintasDisiplinIlmu": string_list(),
                    "tujuanPembelajaran": string_list(),
                    "praktikPedagogis": {
                        "type": "OBJECT",
                        "properties": {
                            "model": enum_list(&LearningModel::labels()),
                            "strategi": enum_list(&LearningStrategy::labels()),
                            "metode": enum_list(&TeachingMethod::labels())
                        },
                        "required": ["model", "strategi", "metode"]
                    },
                    "kemitraanPembelajaran": {
                        "type": "OBJECT",
                        "properties": {
                            "pustakawan": {"type": "STRING", "description": "Explanation for librarian collaboration"},
                            "laboranSekolah": {"type": "STRING", "description": "Explanation for lab assistant collaboration"},
                            "guruLain": {"type": "STRING", "description": "Explanation for other teacher collaboration"},
                            "pihakLuarSekolah": {"type": "STRING", "description": "Explanation for external parties collaboration"}
                        }
                    },
                    "lingkunganPembelajaran": {
                        "type": "OBJECT",
                        "properties": {
                            "fisik": string(),
                            "virtual": string(),
                            "budayaBelajar": string()
                        },
                        "required": ["fisik", "virtual", "budayaBelajar"]
                    },
                    "pemanfaatanDigital": string(),
                    "deepLearningApproach": string()
                },
                "required": [
                    "capaianPembelajaran", "lintasDisiplinIlmu", "tujuanPembelajaran",
                    "praktikPedagogis", "kemitraanPembelajaran", "lingkunganPembelajaran",
                    "pemanfaatanDigital", "deepLearningApproach"
                ]
            },
            "pengalamanBelajar": {
                "type": "OBJECT",
                "properties": {
                    "mindfulMeaningfulJoyful": {
                        "type": "OBJECT",
                        "properties": {
                            "berkesadaran": string(),
                            "bermakna": string(),
                            "menggembirakan": string()
                        },
                        "required": ["berkesadaran", "bermakna", "menggembirakan"]
                    },
                    "langkahPembelajaran": {
                        "type": "OBJECT",
                        "properties": {
                            "kegiatanAwal": timed_activity(),
                            "kegiatanInti": timed_activity(),
                            "kegiatanPenutup": timed_activity()
                        },
                        "required": ["kegiatanAwal", "kegiatanInti", "kegiatanPenutup"]
                    }
                },
                "required": ["mindfulMeaningfulJoyful", "langkahPembelajaran"]
            },
            "asesmenPembelajaran": {
                "type": "OBJECT",
                "properties": {
                    "asesmenAwal": string(),
                    "asesmenProses": string(),
                    "asesmenAkhir": string()
                },
                "required": ["asesmenAwal", "asesmenProses", "asesmenAkhir"]
            },
            "lampiran": {
                "type": "OBJECT",
                "properties": {
                    "lkpd": {
                        "type": "OBJECT",
                        "properties": {
                            "judul": string(),
                            "instruksi": string(),
                            "tabel": {
                                "type": "ARRAY",
                                "items": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "header": string(),
                                        "type": {"type": "STRING", "enum": WorksheetFieldType::labels()}
                                    },
                                    "required": ["header", "type"]
                                }
                            }
                        },
                        "required": ["judul", "instruksi", "tabel"]
                    },
                    "instrumenPenilaian": {
                        "type": "OBJECT",
                        "properties": {
                            "kognitif": string(),
                            "sikap": string(),
                            "presentasi": string()
                        },
                        "required": ["kognitif", "sikap", "presentasi"]
                    }
                },
                "required": ["lkpd", "instrumenPenilaian"]
            }
        },
        "required": [
            "identitas",
            "desainPembelajaran",
            "pengalamanBelajar",
            "asesmenPembelajaran",
            "lampiran"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objectives_schema_pins_batch_size() {
        let schema = objectives_schema();
        assert_eq!(schema["minItems"], 6);
        assert_eq!(schema["maxItems"], 6);
        assert_eq!(schema["items"]["required"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_sequence_schema_restricts_objective_text() {
        let schema = sequence_schema(&["a", "b", "a"]);
        assert_eq!(schema["minItems"], 3);
        assert_eq!(schema["items"]["properties"]["tujuanPembelajaran"]["enum"], json!(["a", "b"]));
        assert_eq!(
            schema["items"]["properties"]["nilaiKBC"]["items"]["enum"].as_array().unwrap().len(),
            5
        );
    }

    #[test]
    fn test_plan_schema_leaves_partnerships_optional() {
        let schema = plan_schema();
        let partners = &schema["properties"]["desainPembelajaran"]["properties"]["kemitraanPembelajaran"];
        assert!(partners.get("required").is_none());
        assert_eq!(schema["required"].as_array().unwrap().len(), 5);
    }
}
