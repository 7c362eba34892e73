//! Terminal rendering of stage results.

use colored::Colorize;
use rencana_core::constants::AUTHOR_CREDIT;
use rencana_core::export::format_minutes;
use rencana_core::{LessonPlanDocument, ObjectiveRecord, SequenceRecord, SessionInfo};
use tabled::settings::object::Columns;
use tabled::settings::{Modify, Style, Width};
use tabled::{Table, Tabled};

const CELL_WIDTH: usize = 28;

#[derive(Tabled)]
struct ObjectiveRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "No")]
    no: u32,
    #[tabled(rename = "Capaian Pembelajaran")]
    standard: String,
    #[tabled(rename = "Konten Pembelajaran")]
    content: String,
    #[tabled(rename = "Kompetensi")]
    competency: String,
    #[tabled(rename = "Materi Pokok")]
    topic: String,
    #[tabled(rename = "Tujuan Pembelajaran")]
    objective: String,
}

#[derive(Tabled)]
struct SequenceRow {
    #[tabled(rename = "No")]
    no: u32,
    #[tabled(rename = "Tujuan Pembelajaran")]
    objective: String,
    #[tabled(rename = "Indikator")]
    indicator: String,
    #[tabled(rename = "Materi Pokok")]
    topic: String,
    #[tabled(rename = "Nilai KBC")]
    values: String,
    #[tabled(rename = "Alokasi Waktu")]
    time: String,
    #[tabled(rename = "Dimensi Profil Lulusan")]
    dimensions: String,
    #[tabled(rename = "Asesmen")]
    assessment: String,
    #[tabled(rename = "Sumber Belajar")]
    resources: String,
}

fn wrapped(table: &mut Table) -> String {
    table.with(Style::modern()).with(Modify::new(Columns::new(1..)).with(Width::wrap(CELL_WIDTH))).to_string()
}

fn join_lines<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

pub fn print_info(info: &SessionInfo) {
    println!("{}", "Informasi Pembelajaran".bold().blue());
    println!("  Madrasah:        {}", info.school_name);
    println!("  Guru:            {}", info.teacher_name);
    println!("  Mata Pelajaran:  {}", info.subject);
    println!("  Fase/Kelas:      {} / {}", info.phase, info.class);
    println!("  Tahun Pelajaran: {}", info.academic_year);
    println!();
}

/// Objectives table. `#` is the selector accepted by `rencana plan`.
pub fn print_objectives(objectives: &[ObjectiveRecord]) {
    let rows: Vec<ObjectiveRow> = objectives
        .iter()
        .enumerate()
        .map(|(i, o)| ObjectiveRow {
            index: i + 1,
            no: o.no,
            standard: o.standard.clone(),
            content: o.content.clone(),
            competency: o.competency.clone(),
            topic: o.topic.clone(),
            objective: o.objective.clone(),
        })
        .collect();

    println!("{}", format!("Tujuan Pembelajaran ({})", objectives.len()).bold().green());
    println!("{}", AUTHOR_CREDIT.italic().dimmed());
    println!("{}", wrapped(&mut Table::new(rows)));
    println!("{}", "*Uraian ini dapat digunakan untuk perencanaan per semester (ganjil/genap) sesuai kebutuhan.".dimmed());
}

pub fn print_sequence(sequence: &[SequenceRecord]) {
    let rows: Vec<SequenceRow> = sequence
        .iter()
        .map(|s| SequenceRow {
            no: s.no,
            objective: s.entry.objective.clone(),
            indicator: s.entry.indicator.clone(),
            topic: s.entry.topic.clone(),
            values: join_lines(&s.entry.values),
            time: s.entry.time_allocation.clone(),
            dimensions: join_lines(&s.entry.dimensions),
            assessment: s.entry.assessment.clone(),
            resources: s.entry.resources.clone(),
        })
        .collect();

    println!("{}", format!("Alur Tujuan Pembelajaran ({})", sequence.len()).bold().green());
    println!("{}", AUTHOR_CREDIT.italic().dimmed());
    println!("{}", wrapped(&mut Table::new(rows)));
}

fn heading(text: &str) {
    println!();
    println!("{}", text.bold().cyan());
}

fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{label}:").bold(), value);
}

fn bullets<T: std::fmt::Display>(label: &str, items: &[T]) {
    println!("  {}", format!("{label}:").bold());
    for item in items {
        println!("    • {item}");
    }
}

/// Section-by-section outline of a lesson plan.
pub fn print_plan(plan: &LessonPlanDocument) {
    println!("{}", "Perencanaan Pembelajaran Mendalam (PPM)".bold().green());
    println!("{}", AUTHOR_CREDIT.italic().dimmed());

    let id = &plan.identity;
    heading("I. IDENTITAS");
    field("Nama Madrasah", &id.school_name);
    field("Nama Guru", &id.teacher_name);
    field("Mata Pelajaran", &id.subject);
    field("Fase / Semester", &format!("{} / {}", id.phase, id.semester));
    field("Alokasi Waktu", &id.time_allocation);
    field("1. Materi Pelajaran", &id.subject_matter);
    bullets("2. Dimensi Profil Lulusan", &id.dimensions);
    field("3. Pokok Materi", &id.core_topic);

    let design = &plan.design;
    heading("II. DESAIN PEMBELAJARAN");
    println!("  {}", design.deep_learning_approach.italic());
    bullets("1. Capaian Pembelajaran", &design.standards);
    bullets("2. Lintas Disiplin Ilmu", &design.cross_disciplinary);
    bullets("3. Tujuan Pembelajaran", &design.objectives);
    bullets("4a. Model", &design.pedagogy.model);
    bullets("4b. Strategi", &design.pedagogy.strategy);
    bullets("4c. Metode", &design.pedagogy.method);
    let partners = &design.partnerships;
    for (label, value) in [
        ("5a. Pustakawan", &partners.librarian),
        ("5b. Laboran sekolah", &partners.lab_assistant),
        ("5c. Guru", &partners.other_teacher),
        ("5d. Pihak dari luar Sekolah", &partners.external_party),
    ] {
        if let Some(value) = value {
            field(label, value);
        }
    }
    field("6a. Fisik", &design.environment.physical);
    field("6b. Virtual", &design.environment.r#virtual);
    field("6c. Budaya Belajar", &design.environment.culture);
    field("7. Pemanfaatan Digital", &design.digital_use);

    let experience = &plan.experience;
    heading("III. PENGALAMAN BELAJAR");
    field("Berkesadaran (mindful)", &experience.principles.mindful);
    field("Bermakna (meaningful)", &experience.principles.meaningful);
    field("Menggembirakan (joyful)", &experience.principles.joyful);
    let steps = &experience.steps;
    for (label, step) in [
        ("1. Kegiatan Awal", &steps.opening),
        ("2. Kegiatan Inti", &steps.core),
        ("3. Kegiatan Penutup", &steps.closing),
    ] {
        field(&format!("{label} ({} Menit)", format_minutes(step.minutes)), &step.description);
    }
    println!("  {}", format!("Total: {} Menit", format_minutes(steps.total_minutes())).dimmed());

    heading("IV. ASESMEN PEMBELAJARAN");
    field("1. Asesmen Awal", &plan.assessment.initial);
    field("2. Asesmen Proses", &plan.assessment.process);
    field("3. Asesmen Akhir", &plan.assessment.summative);

    let appendix = &plan.appendix;
    heading("Lampiran");
    field("LKPD", &appendix.worksheet.title);
    field("Instruksi", &appendix.worksheet.instructions);
    let columns: Vec<String> =
        appendix.worksheet.columns.iter().map(|c| format!("{} ({})", c.header, c.kind)).collect();
    bullets("Kolom", &columns);
    field("Rubrik Kognitif", &appendix.rubric.cognitive);
    field("Rubrik Sikap", &appendix.rubric.attitude);
    field("Rubrik Presentasi", &appendix.rubric.presentation);
}
