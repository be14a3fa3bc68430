//! User-facing strings for the two workflows.

pub const TEXT_REQUIRED: &str = "Lütfen içindekiler metni gir.";
pub const TEXT_IN_PROGRESS: &str = "Metin analizi yapılıyor...";
pub const TEXT_DONE: &str = "Metin analizi tamamlandı.";
pub const TEXT_FAILED: &str = "Metin analizinde bir hata oluştu.";

pub const IMAGE_REQUIRED: &str = "Lütfen bir resim dosyası seç.";
pub const IMAGE_IN_PROGRESS: &str = "Resimden metin okunuyor ve analiz ediliyor...";
pub const IMAGE_DONE: &str = "Resim analizi tamamlandı.";
pub const IMAGE_FAILED: &str = "Resim analizinde bir hata oluştu.";

pub const OCR_UNREADABLE: &str = "(Metin okunamadı)";
