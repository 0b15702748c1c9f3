use regex::Regex;

#[allow(clippy::expect_used)]
// Raster images that can be shown directly as their own preview
pub static THUMBNAILABLE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|gif|bmp|webp|ico|tiff?)$").expect("Failed to compile THUMBNAILABLE regex")
});

/// Freedesktop generic icon name for an entry, chosen by extension.
#[must_use]
pub fn generic_icon_name(extension: &str, is_directory: bool) -> &'static str {
    if is_directory {
        return "folder";
    }

    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "svg" | "ico" | "tiff" | "tif" | "raw" | "cr2" | "nef"
        | "arw" | "dng" | "heic" | "heif" => "image-x-generic",

        "mp4" | "avi" | "mkv" | "mov" | "wmv" | "flv" | "webm" | "m4v" | "mpg" | "mpeg" | "3gp" | "ogv" => {
            "video-x-generic"
        }

        "mp3" | "wav" | "flac" | "ogg" | "oga" | "opus" | "m4a" | "aac" | "wma" => "audio-x-generic",

        "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "odt" | "ods" | "odp" | "rtf" => {
            "x-office-document"
        }

        "zip" | "tar" | "gz" | "bz2" | "xz" | "zst" | "7z" | "rar" | "deb" | "rpm" => "package-x-generic",

        _ => "text-x-generic",
    }
}

#[must_use]
pub fn is_thumbnailable(file_name: &str) -> bool {
    THUMBNAILABLE.is_match(file_name)
}
