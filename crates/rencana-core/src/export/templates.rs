//! Handlebars sources for the exported documents.
//!
//! Field names are the wire keys of the records, since the data handed to
//! the templates is the records' own serialization.

pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{title}}</title>
<style>
{{{style}}}
</style>
</head>
<body>
{{{body}}}
</body>
</html>
"#;

pub const STYLE: &str = "body { font-family: 'Times New Roman', Times, serif; margin: 1in; line-height: 1.5; }
h1, h2, h3, h4, h5, h6 { margin-top: 1em; margin-bottom: 0.5em; line-height: 1.2; }
h1 { font-size: 24pt; text-align: center; }
h2 { font-size: 18pt; }
h3 { font-size: 16pt; }
h4 { font-size: 14pt; }
table { width: 100%; border-collapse: collapse; margin-bottom: 1em; }
th, td { border: 1px solid #000; padding: 8px; text-align: left; vertical-align: top; }
th { background-color: #f2f2f2; }
ul { list-style-type: disc; margin-left: 20px; }
ol { list-style-type: decimal; margin-left: 20px; }
p { margin-bottom: 0.5em; }
.text-center { text-align: center; }
.font-bold { font-weight: bold; }
.italic { font-style: italic; }
.ml-4 { margin-left: 16px; }
.mb-2 { margin-bottom: 8px; }
.mb-4 { margin-bottom: 16px; }
.text-primary { color: #10B981; }
.text-secondary { color: #60A5FA; }
.info-panel { margin-bottom: 1em; padding: 1em; background-color: #eff6ff; border: 1px solid #bfdbfe; }
.info-panel h3 { font-weight: bold; color: #1e40af; margin-bottom: 0.5em; }
.section-break { page-break-before: always; }";

pub const INFO_PANEL: &str = r#"<div class="info-panel">
<h3>Informasi Pembelajaran:</h3>
<p><span class="font-bold">Madrasah:</span> {{info.namaMadrasah}}</p>
<p><span class="font-bold">Guru:</span> {{info.namaGuru}}</p>
<p><span class="font-bold">Mata Pelajaran:</span> {{info.mataPelajaran}}</p>
<p><span class="font-bold">Fase/Kelas:</span> {{info.fase}} / {{info.kelas}}</p>
<p><span class="font-bold">Tahun Pelajaran:</span> {{info.tahunPelajaran}}</p>
</div>
"#;

pub const OBJECTIVES: &str = r#"<h1 class="text-primary">Tujuan Pembelajaran (TP) Mendalam</h1>
<p class="text-center italic mb-4">{{credit}}</p>
<p class="text-center">Berikut adalah Tujuan Pembelajaran yang dihasilkan, terintegrasi dengan kurikulum deep learning dan nilai-nilai cinta, berdasarkan input Anda.</p>
{{> info_panel}}
<table>
<thead>
<tr><th>No</th><th>Capaian Pembelajaran</th><th>Konten Pembelajaran</th><th>Kompetensi</th><th>Materi Pokok</th><th>Tujuan Pembelajaran</th></tr>
</thead>
<tbody>
{{#each objectives}}
<tr><td>{{no}}</td><td>{{capaianPembelajaran}}</td><td>{{kontenPembelajaran}}</td><td>{{kompetensi}}</td><td>{{materiPokok}}</td><td>{{tujuanPembelajaran}}</td></tr>
{{/each}}
</tbody>
</table>
<p class="text-center italic">*Uraian ini dapat digunakan untuk perencanaan per semester (ganjil/genap) sesuai kebutuhan.</p>
"#;

pub const SEQUENCE: &str = r#"<h1 class="text-primary">Alur Tujuan Pembelajaran (ATP)</h1>
<p class="text-center italic mb-4">{{credit}}</p>
<p class="text-center">Berikut adalah Alur Tujuan Pembelajaran yang dihasilkan berdasarkan Tujuan Pembelajaran yang telah dibuat.</p>
{{> info_panel}}
<table>
<thead>
<tr><th>No</th><th>Tujuan Pembelajaran</th><th>Indikator</th><th>Materi Pokok</th><th>Nilai KBC</th><th>Alokasi Waktu</th><th>Dimensi Profil Lulusan</th><th>Asesmen</th><th>Sumber Belajar</th></tr>
</thead>
<tbody>
{{#each sequence}}
<tr>
<td>{{no}}</td>
<td>{{tujuanPembelajaran}}</td>
<td>{{indikator}}</td>
<td>{{materiPokok}}</td>
<td><ul>{{#each nilaiKBC}}<li>{{this}}</li>{{/each}}</ul></td>
<td>{{alokasiWaktu}}</td>
<td><ul>{{#each dimensiProfilLulusan}}<li>{{this}}</li>{{/each}}</ul></td>
<td>{{asesmen}}</td>
<td>{{sumberBelajar}}</td>
</tr>
{{/each}}
</tbody>
</table>
"#;

pub const PLAN: &str = r#"<h1 class="text-primary">Perencanaan Pembelajaran Mendalam (PPM)</h1>
<p class="text-center italic mb-4">{{credit}}</p>
<p class="text-center">Dokumen PPM komprehensif ini dirancang untuk memandu pengajaran yang bermakna dan efektif.</p>
{{#with plan}}
<section>
<h2 class="text-secondary">I. IDENTITAS</h2>
<table>
<tr><td style="width: 30%; font-weight: bold;">Nama Madrasah</td><td>: {{identitas.namaMadrasah}}</td></tr>
<tr><td style="width: 30%; font-weight: bold;">Nama Guru</td><td>: {{identitas.namaGuru}}</td></tr>
<tr><td style="width: 30%; font-weight: bold;">Mata Pelajaran</td><td>: {{identitas.mataPelajaran}}</td></tr>
<tr><td style="width: 30%; font-weight: bold;">Fase / Semester</td><td>: {{identitas.fase}} / {{identitas.semester}}</td></tr>
<tr><td style="width: 30%; font-weight: bold;">Alokasi Waktu</td><td>: {{identitas.alokasiWaktu}}</td></tr>
</table>
<p class="font-bold">1. Materi Pelajaran:</p>
<p class="ml-4">{{identitas.materiPelajaran}}</p>
<p class="font-bold">2. Dimensi Profil Lulusan:</p>
<ul>{{#each identitas.dimensiProfilLulusan}}<li>{{this}}</li>{{/each}}</ul>
<p class="font-bold">3. Pokok Materi:</p>
<p class="ml-4">{{identitas.pokokMateri}}</p>
</section>
<div class="section-break"></div>
{{#with desainPembelajaran}}
<section>
<h2 class="text-secondary">II. DESAIN PEMBELAJARAN</h2>
<p class="italic mb-4">{{deepLearningApproach}}</p>
<p class="font-bold">1. Capaian Pembelajaran:</p>
<ul>{{#each capaianPembelajaran}}<li>{{this}}</li>{{/each}}</ul>
<p class="font-bold">2. Lintas Disiplin Ilmu:</p>
<ul>{{#each lintasDisiplinIlmu}}<li>{{this}}</li>{{/each}}</ul>
<p class="font-bold">3. Tujuan Pembelajaran:</p>
<ul>{{#each tujuanPembelajaran}}<li>{{this}}</li>{{/each}}</ul>
<p class="font-bold">4. Praktik Pedagogis:</p>
<div class="ml-4">
<p><span class="font-bold">a. Model:</span></p>
<ul>{{#each praktikPedagogis.model}}<li>{{this}}</li>{{/each}}</ul>
<p><span class="font-bold">b. Strategi:</span></p>
<ul>{{#each praktikPedagogis.strategi}}<li>{{this}}</li>{{/each}}</ul>
<p><span class="font-bold">c. Metode:</span></p>
<ul>{{#each praktikPedagogis.metode}}<li>{{this}}</li>{{/each}}</ul>
</div>
<p class="font-bold">5. Kemitraan Pembelajaran:</p>
<div class="ml-4">
{{#if kemitraanPembelajaran.pustakawan}}<p><span class="font-bold">a. Pustakawan:</span> {{kemitraanPembelajaran.pustakawan}}</p>{{/if}}
{{#if kemitraanPembelajaran.laboranSekolah}}<p><span class="font-bold">b. Laboran sekolah:</span> {{kemitraanPembelajaran.laboranSekolah}}</p>{{/if}}
{{#if kemitraanPembelajaran.guruLain}}<p><span class="font-bold">c. Guru:</span> {{kemitraanPembelajaran.guruLain}}</p>{{/if}}
{{#if kemitraanPembelajaran.pihakLuarSekolah}}<p><span class="font-bold">d. Pihak dari luar Sekolah:</span> {{kemitraanPembelajaran.pihakLuarSekolah}}</p>{{/if}}
</div>
<p class="font-bold">6. Lingkungan Pembelajaran:</p>
<div class="ml-4">
<p><span class="font-bold">a. Fisik:</span> {{lingkunganPembelajaran.fisik}}</p>
<p><span class="font-bold">b. Virtual:</span> {{lingkunganPembelajaran.virtual}}</p>
<p><span class="font-bold">c. Budaya Belajar:</span> {{lingkunganPembelajaran.budayaBelajar}}</p>
</div>
<p class="font-bold">7. Pemanfaatan Digital:</p>
<p class="ml-4">{{pemanfaatanDigital}}</p>
</section>
{{/with}}
<div class="section-break"></div>
{{#with pengalamanBelajar}}
<section>
<h2 class="text-secondary">III. PENGALAMAN BELAJAR</h2>
<p class="font-bold">Berkesadaran (mindful):</p>
<p class="ml-4">{{mindfulMeaningfulJoyful.berkesadaran}}</p>
<p class="font-bold">Bermakna (meaningful):</p>
<p class="ml-4">{{mindfulMeaningfulJoyful.bermakna}}</p>
<p class="font-bold">Menggembirakan (joyful):</p>
<p class="ml-4">{{mindfulMeaningfulJoyful.menggembirakan}}</p>
<h3>Langkah Pembelajaran Mendalam:</h3>
<div class="ml-4">
<p class="font-bold">1. Kegiatan Awal ({{minutes langkahPembelajaran.kegiatanAwal.alokasiWaktuMenit}} Menit):</p>
<p class="ml-4">{{langkahPembelajaran.kegiatanAwal.description}}</p>
<p class="font-bold">2. Kegiatan Inti ({{minutes langkahPembelajaran.kegiatanInti.alokasiWaktuMenit}} Menit):</p>
<p class="ml-4">{{langkahPembelajaran.kegiatanInti.description}}</p>
<p class="font-bold">3. Kegiatan Penutup ({{minutes langkahPembelajaran.kegiatanPenutup.alokasiWaktuMenit}} Menit):</p>
<p class="ml-4">{{langkahPembelajaran.kegiatanPenutup.description}}</p>
</div>
</section>
{{/with}}
<div class="section-break"></div>
<section>
<h2 class="text-secondary">IV. ASESMEN PEMBELAJARAN</h2>
<p class="font-bold">1. Asesmen Awal Pembelajaran:</p>
<p class="ml-4">{{asesmenPembelajaran.asesmenAwal}}</p>
<p class="font-bold">2. Asesmen Proses Pembelajaran (Formatif dan Sikap):</p>
<p class="ml-4">{{asesmenPembelajaran.asesmenProses}}</p>
<p class="font-bold">3. Asesmen Akhir Pembelajaran (Sumatif):</p>
<p class="ml-4">{{asesmenPembelajaran.asesmenAkhir}}</p>
</section>
<div class="section-break"></div>
{{#with lampiran}}
<section>
<h2 class="text-secondary">Lampiran</h2>
<h3>1. Lembar Kerja Peserta Didik (LKPD)</h3>
<p class="ml-4 mb-2"><span class="font-bold">Judul:</span> {{lkpd.judul}}</p>
<p class="ml-4 mb-2"><span class="font-bold">Instruksi:</span> {{lkpd.instruksi}}</p>
<div class="ml-4">
<table>
<thead>
<tr>{{#each lkpd.tabel}}<th>{{header}}</th>{{/each}}</tr>
</thead>
<tbody>
<tr>{{#each lkpd.tabel}}<td>[Isi oleh siswa]</td>{{/each}}</tr>
</tbody>
</table>
</div>
<h3>2. Instrumen/Rubrik Penilaian</h3>
<div class="ml-4">
<p class="font-bold">A. Rubrik Penilaian Kognitif:</p>
<p class="ml-4">{{instrumenPenilaian.kognitif}}</p>
<p class="font-bold">B. Rubrik Penilaian Sikap:</p>
<p class="ml-4">{{instrumenPenilaian.sikap}}</p>
<p class="font-bold">C. Rubrik Penilaian Presentasi:</p>
<p class="ml-4">{{instrumenPenilaian.presentasi}}</p>
</div>
</section>
{{/with}}
{{/with}}
"#;
