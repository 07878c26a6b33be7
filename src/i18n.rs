//! Locale selection and the fixed bn/en translation tables.

use serde::{Deserialize, Serialize};

/// UI locale. Session-only; not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Bn,
    En,
}

/// One locale's UI strings.
#[derive(Debug, Clone, Serialize)]
pub struct Translations {
    pub upload_title: &'static str,
    pub upload_subtitle: &'static str,
    pub browse_btn: &'static str,
    pub processing: &'static str,
    pub uploading: &'static str,
    pub starting: &'static str,
    pub ai_working: &'static str,
    pub done: &'static str,
    pub output_title: &'static str,
    pub new_file: &'static str,
    pub cancel: &'static str,
    pub start: &'static str,
    pub copy_success: &'static str,
    pub error_msg: &'static str,
    pub no_text: &'static str,
    pub retry: &'static str,
    pub footer: &'static str,
    pub archive_title: &'static str,
    pub no_history: &'static str,
    pub clear_history: &'static str,
    pub delete_item: &'static str,
    pub quick_copy: &'static str,
    pub ai_output_btn: &'static str,
    pub original_tab: &'static str,
    pub ai_tab: &'static str,
    pub polishing: &'static str,
    pub unsupported_format: &'static str,
}

const BN: Translations = Translations {
    upload_title: "অডিও আপলোড করুন",
    upload_subtitle: "যেকোনো সাইজের ফাইল দ্রুত ট্রান্সক্রাইব হবে",
    browse_btn: "ফাইল বাছুন",
    processing: "প্রসেসিং হচ্ছে...",
    uploading: "ফাইল আপলোড হচ্ছে...",
    starting: "শুরু হচ্ছে...",
    ai_working: "AI ট্রান্সক্রিপশন শুরু হয়েছে...",
    done: "সম্পন্ন হয়েছে!",
    output_title: "আউটপুট",
    new_file: "নতুন ফাইল নিন",
    cancel: "বাতিল",
    start: "শুরু করুন",
    copy_success: "কপি হয়েছে!",
    error_msg: "সার্ভারের সাথে সংযোগ বিচ্ছিন্ন হয়েছে। আবার চেষ্টা করুন।",
    no_text: "দুঃখিত, কোনো বাংলা কথা পাওয়া যায়নি।",
    retry: "পুনরায় চেষ্টা করুন",
    footer: "Kotha Lipi Transcriber | খাঁটি বাংলা ও আরবি ট্রান্সক্রিপশন",
    archive_title: "আর্কাইভ",
    no_history: "এখনো কোনো হিস্ট্রি নেই",
    clear_history: "সব মুছুন",
    delete_item: "মুছুন",
    quick_copy: "কপি করুন",
    ai_output_btn: "AI আউটপুট",
    original_tab: "মূল টেক্সট",
    ai_tab: "AI সংস্করণ",
    polishing: "AI ভাষা গুছিয়ে লিখছে...",
    unsupported_format: "দুঃখিত, এই ফাইল ফরম্যাটটি সমর্থিত নয়।",
};

const EN: Translations = Translations {
    upload_title: "Upload Audio",
    upload_subtitle: "Transcribe files of any size quickly",
    browse_btn: "Browse Files",
    processing: "Processing...",
    uploading: "Uploading file...",
    starting: "Starting...",
    ai_working: "AI is transcribing...",
    done: "Completed!",
    output_title: "Output",
    new_file: "New File",
    cancel: "Cancel",
    start: "Start",
    copy_success: "Copied!",
    error_msg: "Connection failed. Please check your internet and retry.",
    no_text: "Sorry, no speech detected.",
    retry: "Retry",
    footer: "Kotha Lipi Transcriber | Pure Bengali & Arabic Transcription",
    archive_title: "Library",
    no_history: "No history yet",
    clear_history: "Clear All",
    delete_item: "Delete",
    quick_copy: "Copy",
    ai_output_btn: "AI Output",
    original_tab: "Original",
    ai_tab: "AI Enhanced",
    polishing: "AI is polishing text...",
    unsupported_format: "File format not supported.",
};

/// Translation table for a locale. Read at each use so a locale switch
/// takes effect on the next render.
pub fn translations(locale: Locale) -> &'static Translations {
    match locale {
        Locale::Bn => &BN,
        Locale::En => &EN,
    }
}
