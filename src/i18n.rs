use serde::Deserialize;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Language {
    ViVn,
    EnUs,
}

impl Language {
    pub fn detect() -> Self {
        if let Some(locale_tag) = sys_locale::get_locale() {
            return Self::from_locale_tag(&locale_tag);
        }

        Self::EnUs
    }

    fn from_locale_tag(raw: &str) -> Self {
        let tag = raw.trim().to_ascii_lowercase();
        if tag.is_empty() {
            return Self::EnUs;
        }

        let is_vietnamese = tag.starts_with("vi")
            || tag == "vn"
            || tag.starts_with("vn_")
            || tag.starts_with("vn-")
            || tag.contains("_vi")
            || tag.contains("-vi");
        if is_vietnamese {
            return Self::ViVn;
        }

        Self::EnUs
    }

    fn file_name(self) -> &'static str {
        match self {
            Self::ViVn => "vi_VN.json",
            Self::EnUs => "en_US.json",
        }
    }
}

macro_rules! locale_message_fields {
    ($macro:ident) => {
        $macro! {
            app_title,
            home_title,
            home_hint,
            home_book_id_placeholder,
            home_open_button,
            home_recent_section,
            home_no_recent_books,
            signed_out_title,
            signed_out_hint,
            sign_out_button,
            open_logs_button,
            enable_logging_button,
            disable_logging_button,
            loading_book,
            downloading_asset,
            parsing_document,
            reading_page_label,
            reading_page_total,
            by_author,
            unknown_author,
            unknown_title,
            zoom_reset_button,
            error_not_found,
            error_no_attachment,
            error_parse_failed,
            error_transport,
            error_unauthorized,
            page_render_failed,
            recent_opened_just_now,
            recent_opened_minutes,
            recent_opened_hours,
            recent_opened_days,
            pdfium_not_found,
            pdfium_cannot_open_file,
            pdfium_cache_lock_poisoned,
            invalid_bitmap_size,
            bitmap_len_mismatch,
            cannot_create_image_buffer,
        }
    };
}

macro_rules! define_raw_locale_messages {
    ($($field:ident),+ $(,)?) => {
        #[derive(Debug, Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawLocaleMessages {
            $(
                $field: String,
            )+
        }
    };
}

macro_rules! define_locale_messages {
    ($($field:ident),+ $(,)?) => {
        #[derive(Debug)]
        pub struct LocaleMessages {
            $(
                pub $field: &'static str,
            )+
        }
    };
}

macro_rules! impl_from_raw_locale_messages {
    ($($field:ident),+ $(,)?) => {
        impl From<RawLocaleMessages> for LocaleMessages {
            fn from(raw: RawLocaleMessages) -> Self {
                Self {
                    $(
                        $field: leak_str(raw.$field),
                    )+
                }
            }
        }
    };
}

locale_message_fields!(define_raw_locale_messages);
locale_message_fields!(define_locale_messages);
locale_message_fields!(impl_from_raw_locale_messages);

fn leak_str(value: String) -> &'static str {
    Box::leak(value.into_boxed_str())
}

static VI_VN_MESSAGES: OnceLock<LocaleMessages> = OnceLock::new();
static EN_US_MESSAGES: OnceLock<LocaleMessages> = OnceLock::new();

#[derive(Clone, Copy, Debug)]
pub struct I18n {
    messages: &'static LocaleMessages,
}

impl I18n {
    pub fn new(lang: Language) -> Self {
        Self {
            messages: messages_for(lang),
        }
    }

    pub fn reading_page_total(self, total: usize) -> String {
        format_template(self.reading_page_total, &[("total", total.to_string())])
    }

    pub fn by_author(self, author: &str) -> String {
        format_template(self.by_author, &[("author", author.to_string())])
    }

    pub fn recent_opened_relative(self, seconds_ago: u64) -> String {
        if seconds_ago < 60 {
            return self.recent_opened_just_now.to_string();
        }
        if seconds_ago < 3_600 {
            return format_template(
                self.recent_opened_minutes,
                &[("minutes", (seconds_ago / 60).to_string())],
            );
        }
        if seconds_ago < 86_400 {
            return format_template(
                self.recent_opened_hours,
                &[("hours", (seconds_ago / 3_600).to_string())],
            );
        }
        format_template(
            self.recent_opened_days,
            &[("days", (seconds_ago / 86_400).to_string())],
        )
    }

    pub fn pdfium_cannot_open_file(self, path: &Path) -> String {
        format_template(
            self.pdfium_cannot_open_file,
            &[("path", path.to_string_lossy().to_string())],
        )
    }

    pub fn invalid_bitmap_size(self, width: u32, height: u32) -> String {
        format_template(
            self.invalid_bitmap_size,
            &[("width", width.to_string()), ("height", height.to_string())],
        )
    }

    pub fn bitmap_len_mismatch(self, got: usize, expected: usize) -> String {
        format_template(
            self.bitmap_len_mismatch,
            &[("got", got.to_string()), ("expected", expected.to_string())],
        )
    }

    pub fn cannot_create_image_buffer(self, width: u32, height: u32) -> String {
        format_template(
            self.cannot_create_image_buffer,
            &[("width", width.to_string()), ("height", height.to_string())],
        )
    }
}

impl Deref for I18n {
    type Target = LocaleMessages;

    fn deref(&self) -> &Self::Target {
        self.messages
    }
}

fn messages_for(lang: Language) -> &'static LocaleMessages {
    match lang {
        Language::ViVn => VI_VN_MESSAGES.get_or_init(|| load_messages(Language::ViVn)),
        Language::EnUs => EN_US_MESSAGES.get_or_init(|| load_messages(Language::EnUs)),
    }
}

fn load_messages(lang: Language) -> LocaleMessages {
    match try_load_messages(lang) {
        Ok(messages) => messages,
        Err(primary_err) => {
            crate::debug_log!(
                "[i18n] failed to load {}: {}",
                lang.file_name(),
                primary_err
            );

            if lang == Language::EnUs {
                panic!(
                    "failed to load i18n file {}: {}",
                    lang.file_name(),
                    primary_err
                );
            }

            match try_load_messages(Language::EnUs) {
                Ok(messages) => {
                    crate::debug_log!(
                        "[i18n] fallback to {} after {} failed",
                        Language::EnUs.file_name(),
                        lang.file_name()
                    );
                    messages
                }
                Err(fallback_err) => panic!(
                    "failed to load i18n files {} ({}) and {} ({})",
                    lang.file_name(),
                    primary_err,
                    Language::EnUs.file_name(),
                    fallback_err
                ),
            }
        }
    }
}

fn try_load_messages(lang: Language) -> Result<LocaleMessages, String> {
    let (path, raw) = load_locale_file(lang.file_name())?;
    crate::debug_log!(
        "[i18n] loading locale {} from {}",
        lang.file_name(),
        path.display()
    );

    serde_json::from_str::<RawLocaleMessages>(&raw)
        .map(LocaleMessages::from)
        .map_err(|err| format!("{} parse failed: {}", path.display(), err))
}

fn load_locale_file(file_name: &str) -> Result<(PathBuf, String), String> {
    let candidates = collect_i18n_dirs();
    for dir in &candidates {
        let path = dir.join(file_name);
        if !path.is_file() {
            continue;
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|err| format!("{} read failed: {}", path.display(), err))?;
        return Ok((path, raw));
    }

    let searched = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!(
        "{} not found; searched directories: {}",
        file_name, searched
    ))
}

fn app_resources_i18n_dir(current_exe: &Path) -> Option<PathBuf> {
    let macos_dir = current_exe.parent()?;
    if macos_dir.file_name()?.to_string_lossy() != "MacOS" {
        return None;
    }
    let contents_dir = macos_dir.parent()?;
    if contents_dir.file_name()?.to_string_lossy() != "Contents" {
        return None;
    }

    Some(contents_dir.join("Resources").join("i18n"))
}

#[cfg(target_os = "linux")]
fn linux_packaged_i18n_dir(current_exe: &Path) -> Option<PathBuf> {
    let exe_dir = current_exe.parent()?;
    if exe_dir.file_name()?.to_string_lossy() != "bin" {
        return None;
    }
    let prefix_dir = exe_dir.parent()?;
    Some(prefix_dir.join("lib").join("folio").join("i18n"))
}

fn push_i18n_dir(
    candidates: &mut Vec<PathBuf>,
    seen: &mut std::collections::HashSet<PathBuf>,
    candidate: PathBuf,
) {
    if candidate.as_os_str().is_empty() {
        return;
    }

    let normalized = if candidate.exists() {
        candidate.canonicalize().unwrap_or(candidate)
    } else if candidate.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&candidate))
            .unwrap_or(candidate)
    } else {
        candidate
    };

    if seen.insert(normalized.clone()) {
        candidates.push(normalized);
    }
}

fn collect_i18n_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    let mut seen = std::collections::HashSet::new();

    if let Ok(current_exe) = std::env::current_exe() {
        if let Some(resources_i18n_dir) = app_resources_i18n_dir(&current_exe) {
            push_i18n_dir(&mut candidates, &mut seen, resources_i18n_dir);
        }
        #[cfg(target_os = "linux")]
        if let Some(packaged_i18n_dir) = linux_packaged_i18n_dir(&current_exe) {
            push_i18n_dir(&mut candidates, &mut seen, packaged_i18n_dir);
        }

        if let Some(exe_dir) = current_exe.parent() {
            push_i18n_dir(
                &mut candidates,
                &mut seen,
                exe_dir.join("assets").join("i18n"),
            );
            push_i18n_dir(&mut candidates, &mut seen, exe_dir.join("i18n"));

            for ancestor in exe_dir.ancestors().take(6) {
                push_i18n_dir(
                    &mut candidates,
                    &mut seen,
                    ancestor.join("assets").join("i18n"),
                );
                push_i18n_dir(&mut candidates, &mut seen, ancestor.join("i18n"));
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        push_i18n_dir(
            &mut candidates,
            &mut seen,
            PathBuf::from("/usr/lib/folio/i18n"),
        );
        push_i18n_dir(
            &mut candidates,
            &mut seen,
            PathBuf::from("/usr/local/lib/folio/i18n"),
        );
    }

    if let Ok(current_dir) = std::env::current_dir() {
        push_i18n_dir(
            &mut candidates,
            &mut seen,
            current_dir.join("assets").join("i18n"),
        );
        push_i18n_dir(&mut candidates, &mut seen, current_dir.join("i18n"));
    }

    push_i18n_dir(&mut candidates, &mut seen, PathBuf::from("./assets/i18n"));
    push_i18n_dir(&mut candidates, &mut seen, PathBuf::from("./i18n"));

    candidates
}

fn format_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        let token = format!("{{{key}}}");
        output = output.replace(&token, value);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tag_detection() {
        assert_eq!(Language::from_locale_tag("vi-VN"), Language::ViVn);
        assert_eq!(Language::from_locale_tag("vi"), Language::ViVn);
        assert_eq!(Language::from_locale_tag("en-US"), Language::EnUs);
        assert_eq!(Language::from_locale_tag(""), Language::EnUs);
        assert_eq!(Language::from_locale_tag("fr-FR"), Language::EnUs);
    }

    #[test]
    fn template_substitution() {
        assert_eq!(
            format_template("{minutes} min ago", &[("minutes", "5".to_string())]),
            "5 min ago"
        );
        assert_eq!(
            format_template("no placeholders", &[("total", "3".to_string())]),
            "no placeholders"
        );
    }
}
