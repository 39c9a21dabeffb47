//! Types for writing ASE palette files
//!

use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;
use tracing::instrument;
use widestring::U16String;

use crate::{
    error::{Error, Result},
    types::{
        AseFile, Color, Entry, Group, BLOCK_COLOR, BLOCK_GROUP_END, BLOCK_GROUP_START, SIGNATURE,
        VERSION,
    },
};

/// Encode a palette to a writer.
///
/// ```
/// # fn doit() -> ase::error::Result<()>
/// # {
/// use ase::{AseFile, Color, ColorModel, ColorType, Entry};
///
/// // We use a buffer here, though you'd normally use a `File`
/// let mut buf = Vec::new();
///
/// let mut palette = AseFile::new();
/// palette.entries.push(Entry::Color(Color {
///     name: "Red".to_string(),
///     model: ColorModel::Rgb,
///     values: vec![1.0, 0.0, 0.0],
///     kind: ColorType::Global,
/// }));
///
/// ase::encode(&palette, &mut buf)?;
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
///
/// Every length and count field is recomputed from the palette's actual contents, so a
/// palette mutated after decoding re-encodes consistently.
#[instrument(skip_all, err)]
pub fn encode<W: Write>(palette: &AseFile, mut writer: W) -> Result<()> {
    writer.write_all(&SIGNATURE)?;
    writer.write_u16::<BigEndian>(VERSION.0)?;
    writer.write_u16::<BigEndian>(VERSION.1)?;
    writer.write_i32::<BigEndian>(palette.block_count())?;

    for entry in &palette.entries {
        match entry {
            Entry::Color(color) => write_color(&mut writer, color)?,
            Entry::Group(group) => write_group(&mut writer, group)?,
        }
    }

    Ok(())
}

/// Write one group: start marker, name fields, contained colors, end marker.
fn write_group<W: Write>(writer: &mut W, group: &Group) -> Result<()> {
    writer.write_u16::<BigEndian>(BLOCK_GROUP_START)?;

    // The length field covers the group's own name fields only. The contained colors
    // carry their own tags and are delimited by the end marker, matching the on-disk
    // convention of files produced by Adobe applications.
    let mut header = Vec::new();
    write_name(&mut header, &group.name)?;
    writer.write_i32::<BigEndian>(header.len() as i32)?;
    writer.write_all(&header)?;

    for color in &group.colors {
        write_color(writer, color)?;
    }

    writer.write_u16::<BigEndian>(BLOCK_GROUP_END)?;

    Ok(())
}

/// Write one color block: tag, length, name fields, model, values, type.
fn write_color<W: Write>(writer: &mut W, color: &Color) -> Result<()> {
    let mut body = Vec::new();
    write_name(&mut body, &color.name)?;
    body.write_all(&color.model.tag())?;
    for value in &color.values {
        body.write_f32::<BigEndian>(*value)?;
    }
    body.write_u16::<BigEndian>(color.kind.tag())?;

    writer.write_u16::<BigEndian>(BLOCK_COLOR)?;
    writer.write_i32::<BigEndian>(body.len() as i32)?;
    writer.write_all(&body)?;

    Ok(())
}

/// Write a name as length-prefixed, zero-terminated UTF-16BE.
///
/// The length field counts UTF-16 code units, the terminator included, so names outside
/// the basic multilingual plane survive a round trip. A name whose unit count does not
/// fit the 16-bit field is rejected rather than truncated.
fn write_name<W: Write>(writer: &mut W, name: &str) -> Result<()> {
    let units = U16String::from_str(name).into_vec();

    let length =
        u16::try_from(units.len() + 1).map_err(|_| Error::NameTooLong(units.len()))?;

    writer.write_u16::<BigEndian>(length)?;
    for unit in units {
        writer.write_u16::<BigEndian>(unit)?;
    }
    writer.write_u16::<BigEndian>(0)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_str_eq;
    use tracing_test::traced_test;

    use crate::{
        error::{Error, Result},
        types::{AseFile, Color, ColorModel, ColorType, Entry, Group},
        write::encode,
    };

    fn named_color(name: String) -> Color {
        Color {
            name,
            model: ColorModel::Gray,
            values: vec![0.5],
            kind: ColorType::Normal,
        }
    }

    #[traced_test]
    #[test]
    fn write_empty_palette() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            b'A', b'S', b'E', b'F',
            0x00, 0x01, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ];

        let mut actual = Vec::new();
        encode(&AseFile::new(), &mut actual)?;

        assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));

        Ok(())
    }

    #[traced_test]
    #[test]
    fn write_single_color() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            // Header
            b'A', b'S', b'E', b'F',
            0x00, 0x01, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x01,
            // Color block
            0x00, 0x01,
            0x00, 0x00, 0x00, 0x1C,
            0x00, 0x04,
            0x00, b'R', 0x00, b'e', 0x00, b'd', 0x00, 0x00,
            b'R', b'G', b'B', b' ',
            0x3F, 0x80, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00,
        ];

        let palette = AseFile {
            entries: vec![Entry::Color(Color {
                name: "Red".to_string(),
                model: ColorModel::Rgb,
                values: vec![1.0, 0.0, 0.0],
                kind: ColorType::Global,
            })],
        };

        let mut actual = Vec::new();
        encode(&palette, &mut actual)?;

        assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));

        Ok(())
    }

    #[traced_test]
    #[test]
    fn write_empty_group() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            // Header, 2 blocks: start and end markers
            b'A', b'S', b'E', b'F',
            0x00, 0x01, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x02,
            // Group start, length covers the name fields only
            0xC0, 0x01,
            0x00, 0x00, 0x00, 0x0C,
            0x00, 0x05,
            0x00, b'W', 0x00, b'a', 0x00, b'r', 0x00, b'm', 0x00, 0x00,
            // Group end
            0xC0, 0x02,
        ];

        let palette = AseFile {
            entries: vec![Entry::Group(Group {
                name: "Warm".to_string(),
                colors: Vec::new(),
            })],
        };

        let mut actual = Vec::new();
        encode(&palette, &mut actual)?;

        assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));

        Ok(())
    }

    #[traced_test]
    #[test]
    fn write_group_length_excludes_colors() -> Result<()> {
        let palette = AseFile {
            entries: vec![Entry::Group(Group {
                name: "G".to_string(),
                colors: vec![Color {
                    name: "K".to_string(),
                    model: ColorModel::Gray,
                    values: vec![0.5],
                    kind: ColorType::Normal,
                }],
            })],
        };

        let mut actual = Vec::new();
        encode(&palette, &mut actual)?;

        // Group block length sits right after the start tag: 2 bytes name length plus
        // two UTF-16 units ("G" and the terminator).
        assert_eq!(&actual[14..18], &[0x00, 0x00, 0x00, 0x06]);

        Ok(())
    }

    #[traced_test]
    #[test]
    fn write_name_at_length_limit() -> Result<()> {
        // 65534 units plus the terminator is the largest count the field can hold.
        let palette = AseFile {
            entries: vec![Entry::Color(named_color("x".repeat(65534)))],
        };

        let mut actual = Vec::new();
        encode(&palette, &mut actual)?;

        // Name length field of the first color block.
        assert_eq!(&actual[18..20], &[0xFF, 0xFF]);

        Ok(())
    }

    #[traced_test]
    #[test]
    fn write_name_one_past_length_limit() {
        let palette = AseFile {
            entries: vec![Entry::Color(named_color("x".repeat(65535)))],
        };

        let mut actual = Vec::new();
        let result = encode(&palette, &mut actual);
        assert!(matches!(result, Err(Error::NameTooLong(65535))));
    }

    #[traced_test]
    #[test]
    fn write_name_far_past_length_limit() {
        let palette = AseFile {
            entries: vec![Entry::Group(Group {
                name: "y".repeat(70_000),
                colors: Vec::new(),
            })],
        };

        let mut actual = Vec::new();
        let result = encode(&palette, &mut actual);
        assert!(matches!(result, Err(Error::NameTooLong(70_000))));
    }
}
