use crate::core::error::MetadataError;
use crate::core::types::AlbumArt;

/// Decode raw APIC bytes into an RGBA bitmap.
///
/// The format is sniffed from the bytes; the frame's mime string is not trusted.
pub fn decode_album_art(bytes: &[u8]) -> Result<AlbumArt, MetadataError> {
    let img = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = img.dimensions();

    Ok(AlbumArt {
        width,
        height,
        rgba: img.into_raw(),
    })
}
