// Purpose - external interfaces, format conversions

/// Mono float WAV export.
pub mod wav;
