//! Fixed parameters of the planning pipeline.

/// Objectives requested per curriculum standard in Stage 1.
pub const OBJECTIVES_PER_STANDARD: usize = 6;

/// Upper bound on curriculum standards per session.
pub const MAX_STANDARDS: usize = 6;

/// Model used when neither flags nor config name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Curriculum phases accepted in session info, with their grade ranges.
pub const PHASES: [(&str, &str); 6] = [
    ("A", "Kelas 1-2 SD/MI"),
    ("B", "Kelas 3-4 SD/MI"),
    ("C", "Kelas 5-6 SD/MI"),
    ("D", "Kelas 7-9 SMP/MTs"),
    ("E", "Kelas 10 SMA/MA"),
    ("F", "Kelas 11-12 SMA/MA"),
];

/// Semester stamped on every lesson plan.
pub const DEFAULT_SEMESTER: &str = "Ganjil";

/// Time allocation used when the selected objective has no sequence entry with one.
pub const UNSPECIFIED_TIME: &str = "Belum ditentukan";

/// Author line printed under each document title.
pub const AUTHOR_CREDIT: &str = "Dibuat oleh HARMAJI";

/// Fixed explanation placed in every plan's design section, replacing whatever the model wrote.
pub const DEEP_LEARNING_APPROACH: &str = "Pembelajaran mendalam (deep learning) adalah pendekatan holistik yang mengintegrasikan pembelajaran penuh kesadaran (mindful), pembelajaran bermakna (meaningful), dan pembelajaran menyenangkan (joyful). Ketiga komponen ini saling berkaitan dan memperkuat satu sama lain untuk menciptakan lingkungan belajar yang efektif dan menyenangkan. Pembelajaran yang bermakna akan meningkatkan motivasi, pembelajaran yang sadar akan membantu siswa fokus, dan pembelajaran yang menyenangkan akan membuat mereka lebih menikmati prosesnya. Pendekatan ini mengintegrasikan olah pikir, olah hati, olah rasa, dan olah raga secara terpadu untuk pembelajaran yang lebih holistik.";
