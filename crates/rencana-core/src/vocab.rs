//! Closed vocabularies the model must choose from.
//!
//! Wire strings are the exact labels used in the prompts and response schemas;
//! changing one breaks the contract between stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every member, in presentation order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire label.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// All wire labels, in presentation order.
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s.trim())
                    .ok_or_else(|| format!("unknown {} '{}'", stringify!($name), s))
            }
        }
    };
}

vocabulary! {
    /// Values of the love-based curriculum (Nilai KBC).
    CharacterValue {
        LoveOfGodAndProphet => "Cinta Allah dan RasulNYa",
        LoveOfKnowledge => "Cinta Ilmu",
        LoveOfSelfAndOthers => "Cinta Diri dan Sesama",
        LoveOfNature => "Cinta Alam",
        LoveOfNation => "Cinta Bangsa dan Negeri",
    }
}

vocabulary! {
    /// Graduate profile dimensions (Dimensi Profil Lulusan).
    ProfileDimension {
        Faith => "Keimanan dan Ketakwaan terhadap Tuhan YME",
        Citizenship => "Kewargaan",
        CriticalReasoning => "Penalaran Kritis",
        Creativity => "Kreativitas",
        Collaboration => "Kolaborasi",
        Independence => "Kemandirian",
        Health => "Kesehatan",
        Communication => "Komunikasi",
    }
}

vocabulary! {
    /// Learning models for the pedagogical practice section.
    LearningModel {
        ProblemBased => "Problem Based Learning",
        ProjectBased => "Project Based Learning",
        Discovery => "Discovery Learning",
        Inquiry => "Inquiry Learning",
        Cooperative => "Cooperative Learning",
        Blended => "Blended Learning",
        Hybrid => "Hybrid Learning",
        GroupInvestigation => "Group Investigation",
    }
}

vocabulary! {
    /// Learning strategies for the pedagogical practice section.
    LearningStrategy {
        Discovery => "Pembelajaran Penemuan (Discovery Learning)",
        Inquiry => "Pembelajaran Inkuiri (Inquiry Learning)",
        Collaborative => "Pembelajaran Kolaboratif",
        ProblemSolving => "Pemecahan Masalah (Problem Solving)",
        CaseStudy => "Studi Kasus",
        Discussion => "Diskusi",
    }
}

vocabulary! {
    /// Teaching methods for the pedagogical practice section.
    TeachingMethod {
        Discussion => "Diskusi",
        Presentation => "Presentasi",
        Project => "Projek",
        Simulation => "Simulasi",
        RolePlay => "Role Play",
        FieldVisit => "Kunjungan Lapangan",
        Experiment => "Eksperimen",
        InteractiveLecture => "Ceramah Interaktif",
    }
}

vocabulary! {
    /// Input kind of a worksheet column.
    WorksheetFieldType {
        Text => "text",
        Number => "number",
        TextArea => "textarea",
        Checkbox => "checkbox",
    }
}
