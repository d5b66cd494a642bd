//! Voice notes travel as base64 `data:` URIs embedded in the log entry.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const DEFAULT_AUDIO_MIME: &str = "audio/webm";

/// Encode raw audio bytes as `data:<mime>;base64,<payload>`.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Strip a leading `data:audio/<subtype>;base64,` prefix. Anything else is
/// returned unchanged.
pub fn strip_audio_prefix(uri: &str) -> &str {
    let Some(rest) = uri.strip_prefix("data:audio/") else {
        return uri;
    };
    let Some((subtype, payload)) = rest.split_once(";base64,") else {
        return uri;
    };
    let is_word = !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if is_word { payload } else { uri }
}

/// Guess an audio MIME type from a file extension.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "m4a" | "mp4" => "audio/mp4",
        "flac" => "audio/flac",
        _ => DEFAULT_AUDIO_MIME,
    }
}
