//! Prompt builders for the three stages.
//!
//! Prompts are written in Indonesian, the language of the curriculum documents
//! they produce. Keys named in each prompt must match the stage's schema.

use crate::constants::{DEFAULT_SEMESTER, OBJECTIVES_PER_STANDARD};
use crate::records::{ObjectiveRecord, SequenceRecord, SessionInfo};
use crate::vocab::{CharacterValue, ProfileDimension};

/// What Stage 3 knows about the selected objective, resolved from its sequence entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanContext<'a> {
    pub objective: &'a ObjectiveRecord,
    pub values: Vec<CharacterValue>,
    pub dimensions: Vec<ProfileDimension>,
    pub time_allocation: String,
}

impl<'a> PlanContext<'a> {
    /// Takes values, dimensions and time from the first relevant entry.
    pub fn resolve(objective: &'a ObjectiveRecord, relevant: &[SequenceRecord], fallback_time: &str) -> Self {
        match relevant.first() {
            Some(primary) => Self {
                objective,
                values: primary.entry.values.clone(),
                dimensions: primary.entry.dimensions.clone(),
                time_allocation: primary.entry.time_allocation.clone(),
            },
            None => Self {
                objective,
                values: Vec::new(),
                dimensions: Vec::new(),
                time_allocation: fallback_time.to_string(),
            },
        }
    }

    /// One-line subject-matter summary tying the topic to its character values.
    pub fn subject_matter_summary(&self) -> String {
        let values: Vec<&str> = self.values.iter().map(|v| v.as_str()).collect();
        format!(
            "Materi \"{}\" ini diintegrasikan dengan nilai-nilai cinta seperti {} untuk menciptakan pembelajaran yang holistik dan bermakna.",
            self.objective.topic,
            values.join(", ")
        )
    }
}

fn session_block(info: &SessionInfo) -> String {
    format!(
        "Nama Madrasah: {}\nNama Guru: {}\nMata Pelajaran: {}\nFase: {}\nKelas: {}\nTahun Pelajaran: {}",
        info.school_name, info.teacher_name, info.subject, info.phase, info.class, info.academic_year
    )
}

fn bullets<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().map(|s| format!("- {}", s.as_ref())).collect::<Vec<_>>().join("\n")
}

/// Stage 1 prompt for a single curriculum standard.
pub fn objectives_prompt(info: &SessionInfo, standard: &str) -> String {
    format!(
        "Sebagai seorang ahli kurikulum dengan fokus pada pembelajaran mendalam dan integrasi nilai-nilai cinta, \
buatkan {n} (enam) set Tujuan Pembelajaran (TP) yang mendalam berdasarkan Capaian Pembelajaran berikut.
Setiap set TP harus mencakup: Konten Pembelajaran, Kompetensi, Materi Pokok, dan Tujuan Pembelajaran.
Pastikan setiap TP mengintegrasikan nilai-nilai Kurikulum Berbasis Cinta (KBC) secara implisit dan relevan dengan fase, kelas, dan mata pelajaran yang diberikan.

Detail Pembelajaran:
{session}

Capaian Pembelajaran (CP): {standard}

Output harus dalam format JSON array of objects, di mana setiap objek memiliki kunci 'kontenPembelajaran', 'kompetensi', 'materiPokok', dan 'tujuanPembelajaran'.
Sertakan {n} objek untuk CP ini.",
        n = OBJECTIVES_PER_STANDARD,
        session = session_block(info),
        standard = standard,
    )
}

/// Stage 2 prompt for the whole flattened objective list.
pub fn sequence_prompt(objectives: &[ObjectiveRecord]) -> String {
    format!(
        "Sebagai seorang ahli kurikulum, buatkan Alur Tujuan Pembelajaran (ATP) berdasarkan daftar Tujuan Pembelajaran (TP) berikut.
Untuk setiap Tujuan Pembelajaran, tentukan:
- Indikator: Indikator pencapaian yang spesifik dan terukur.
- Materi Pokok: Materi utama yang akan diajarkan.
- Nilai KBC (Kurikulum Berbasis Cinta): Pilih dan jelaskan satu atau lebih nilai cinta yang sesuai dari daftar ini: {values}.
- Alokasi Waktu: Estimasi waktu dalam format \"X Jam Pelajaran\" atau \"X Menit\".
- Dimensi Profil Lulusan: Pilih satu atau lebih dimensi yang paling sesuai dari daftar ini: {dimensions}.
- Asesmen: Deskripsi singkat metode asesmen yang sesuai.
- Sumber Belajar: Contoh sumber belajar yang relevan.

Daftar Tujuan Pembelajaran:
{list}

Buat tepat satu objek untuk setiap Tujuan Pembelajaran, dengan urutan yang sama, dan salin teks 'tujuanPembelajaran' persis seperti pada daftar.
Output harus dalam format JSON array of objects, di mana setiap objek memiliki kunci 'tujuanPembelajaran', 'indikator', 'materiPokok', 'nilaiKBC' (array of strings), 'alokasiWaktu', 'dimensiProfilLulusan' (array of strings), 'asesmen', dan 'sumberBelajar'.",
        values = CharacterValue::labels().join(", "),
        dimensions = ProfileDimension::labels().join(", "),
        list = bullets(objectives.iter().map(|o| o.objective.as_str())),
    )
}

/// Stage 3 prompt for one objective.
pub fn plan_prompt(info: &SessionInfo, ctx: &PlanContext<'_>) -> String {
    let mut prompt = format!(
        "Sebagai seorang ahli pedagogi dan kurikulum, buatkan Perencanaan Pembelajaran Mendalam (PPM) yang detail dan komprehensif berdasarkan informasi berikut untuk SATU Tujuan Pembelajaran spesifik.
Integrasikan prinsip pembelajaran mendalam (mindful, meaningful, joyful) dan nilai-nilai Kurikulum Berbasis Cinta (KBC) di seluruh dokumen.

Informasi Dasar:
{session}
Semester: {semester}
Alokasi Waktu: {time}

Capaian Pembelajaran (CP) yang terkait dengan TP ini:
- {standard}

Tujuan Pembelajaran (TP) yang akan dibuat PPM-nya:
- {objective}

Materi Pokok Utama untuk TP ini: {topic}
Ringkasan materi: {summary}

Dimensi Profil Lulusan yang relevan untuk TP ini:
{dimensions}

Nilai Kurikulum Berbasis Cinta (KBC) yang relevan untuk TP ini:
{values}
",
        session = session_block(info),
        semester = DEFAULT_SEMESTER,
        time = ctx.time_allocation,
        standard = ctx.objective.standard,
        objective = ctx.objective.objective,
        topic = ctx.objective.topic,
        summary = ctx.subject_matter_summary(),
        dimensions = bullets(ctx.dimensions.iter().map(|d| d.as_str())),
        values = bullets(ctx.values.iter().map(|v| v.as_str())),
    );

    prompt.push_str(&format!(
        "
Instruksi untuk setiap bagian PPM:

I. IDENTITAS
- Isi nama madrasah, guru, mata pelajaran, fase, semester ({semester}), alokasi waktu (dari informasi yang diberikan), dan pokok materi secara otomatis.
- Materi Pelajaran: Jelaskan secara singkat materi pelajaran ini dengan mengintegrasikan nilai-nilai KBC ({all_values}) yang relevan dengan TP yang dipilih. Gunakan informasi KBC dari TP dan ATP yang relevan.
- Dimensi Profil Lulusan: Pilih dimensi yang paling relevan dari: {all_dimensions} berdasarkan TP yang diberikan. Gunakan informasi dari Dimensi Profil Lulusan yang relevan dengan TP ini.

II. DESAIN PEMBELAJARAN
- Capaian Pembelajaran: Sertakan CP yang relevan dengan TP ini dan bagaimana ia terintegrasi dengan nilai cinta.
- Lintas Disiplin Ilmu: Identifikasi dan jelaskan mata pelajaran lain yang relevan dan dapat diintegrasikan dengan TP ini.
- Tujuan Pembelajaran: Sertakan TP yang relevan dan bagaimana ia terintegrasi dengan nilai cinta.
- Praktik Pedagogis:
    - Model: Pilih dan jelaskan model pembelajaran yang sesuai dengan Pembelajaran Mendalam (misal: Problem Based Learning, Project Based Learning) dan TP ini.
    - Strategi: Pilih dan jelaskan strategi pembelajaran yang sesuai dengan TP ini (misal: Pembelajaran Penemuan, Pembelajaran Inkuiri, Kolaboratif).
    - Metode: Pilih dan jelaskan metode pembelajaran yang sesuai dengan TP ini (misal: Diskusi, Presentasi, Projek, Simulasi).
- Kemitraan Pembelajaran: Jelaskan potensi kolaborasi dengan:
    - Pustakawan: Jelaskan bagaimana mereka dapat mendukung pembelajaran untuk TP ini.
    - Laboran sekolah: Jelaskan bagaimana mereka dapat mendukung pembelajaran untuk TP ini.
    - Guru lain: Jelaskan peran kolaborasi dengan guru mata pelajaran lain untuk TP ini.
    - Pihak dari luar Sekolah: Identifikasi dan jelaskan pihak eksternal (misal: komunitas lokal, praktisi) yang relevan untuk TP ini.
- Lingkungan Pembelajaran:
    - Fisik: Jelaskan pengaturan fisik kelas/ruang belajar yang mendukung pembelajaran TP ini.
    - Virtual: Jelaskan platform atau sumber daya digital yang digunakan untuk TP ini.
    - Budaya Belajar: Jelaskan atmosfer dan norma yang mendukung pembelajaran TP ini.
- Pemanfaatan Digital: Sebutkan dan jelaskan media digital spesifik yang akan digunakan dan relevansinya dengan materi/TP ini.
- Deep Learning Approach: Masukkan deskripsi standar tentang pendekatan pembelajaran mendalam.

III. PENGALAMAN BELAJAR
- Berkesadaran (mindful): Jelaskan kegiatan untuk TP ini yang mendorong kesadaran dan refleksi.
- Bermakna (meaningful): Jelaskan kegiatan untuk TP ini yang mengaitkan konsep dengan pengalaman hidup.
- Menggembirakan (joyful): Jelaskan kegiatan untuk TP ini yang menciptakan suasana belajar positif.
- Langkah Pembelajaran Mendalam:
    - Kegiatan Awal (Alokasi waktu: 10-15 menit): Deskripsikan aktivitas pembuka untuk TP ini.
    - Kegiatan Inti (Alokasi waktu: 60-75 menit): Deskripsikan aktivitas utama untuk TP ini, termasuk implementasi mindful, meaningful, joyful.
    - Kegiatan Penutup (Alokasi waktu: 10-15 menit): Deskripsikan aktivitas penutup dan refleksi untuk TP ini.

IV. ASESMEN PEMBELAJARAN
- Asesmen Awal Pembelajaran: Jelaskan metode asesmen awal yang sesuai untuk TP ini.
- Asesmen Proses Pembelajaran (Formatif dan Sikap): Jelaskan metode asesmen formatif dan penilaian sikap untuk TP ini.
- Asesmen Akhir Pembelajaran (Sumatif): Jelaskan metode asesmen sumatif untuk TP ini.

Lampiran
- Lembar Kerja Peserta Didik (LKPD):
    - Judul: Buat judul LKPD yang relevan dengan materi TP ini.
    - Instruksi: Berikan instruksi singkat untuk LKPD ini.
    - Tabel: Desain struktur tabel sederhana yang relevan untuk LKPD ini.
- Instrumen/Rubrik Penilaian:
    - Rubrik Penilaian Kognitif: Jelaskan kriteria singkat untuk TP ini.
    - Rubrik Penilaian Sikap: Jelaskan kriteria singkat untuk TP ini.
    - Rubrik Penilaian Presentasi: Jelaskan kriteria singkat untuk TP ini.

Output harus dalam format JSON yang sesuai dengan skema yang diberikan.",
        semester = DEFAULT_SEMESTER,
        all_values = CharacterValue::labels().join(", "),
        all_dimensions = ProfileDimension::labels().join(", "),
    ));

    prompt
}
