//! Types for reading ASE palette files
//!

use byteorder::{BigEndian, ReadBytesExt};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::instrument;
use widestring::U16String;

use crate::{
    error::{Error, Result},
    types::{
        AseFile, Color, ColorModel, ColorType, Entry, Group, BLOCK_COLOR, BLOCK_GROUP_END,
        BLOCK_GROUP_START, SIGNATURE, VERSION,
    },
};

/// Decode an ASE palette from a file on disk.
pub fn decode_file(path: impl AsRef<Path>) -> Result<AseFile> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Decode an ASE palette from a reader.
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn list_colors(reader: impl Read) -> ase::error::Result<()> {
///     let palette = ase::decode(reader)?;
///
///     for entry in &palette.entries {
///         match entry {
///             ase::Entry::Color(color) => println!("{}", color.name),
///             ase::Entry::Group(group) => println!("{} ({} colors)", group.name, group.colors.len()),
///         }
///     }
///
///     Ok(())
/// }
/// ```
///
/// The reader is consumed in a single forward pass. Bytes past the declared block count
/// are left unread; a stream that ends before the count is satisfied is an error, and no
/// partial palette is returned.
#[instrument(skip_all, err)]
pub fn decode<R: Read>(mut reader: R) -> Result<AseFile> {
    let mut signature = [0u8; 4];
    reader.read_exact(&mut signature)?;
    if signature != SIGNATURE {
        return Err(Error::InvalidSignature(signature));
    }

    let major = reader.read_u16::<BigEndian>()?;
    let minor = reader.read_u16::<BigEndian>()?;
    if (major, minor) != VERSION {
        return Err(Error::UnsupportedVersion(major, minor));
    }

    let num_blocks = reader.read_i32::<BigEndian>()?;
    if num_blocks < 0 {
        return Err(Error::InvalidBlockCount(num_blocks));
    }

    let mut entries = Vec::new();
    let mut blocks_read: i32 = 0;
    while blocks_read < num_blocks {
        let tag = reader.read_u16::<BigEndian>()?;
        blocks_read += 1;
        match tag {
            BLOCK_COLOR => entries.push(Entry::Color(read_color(&mut reader)?)),
            BLOCK_GROUP_START => {
                let mut group = read_group_header(&mut reader)?;
                blocks_read += read_group_colors(&mut reader, &mut group)?;
                entries.push(Entry::Group(group));
            }
            other => return Err(Error::UnknownBlockTag(other)),
        }
    }

    Ok(AseFile { entries })
}

/// Read a group's own fields, after the start tag has been consumed.
///
/// The contained colors are not read here: they follow as independently tagged blocks
/// and are collected by [`read_group_colors`] until the end marker.
fn read_group_header<R: Read>(reader: &mut R) -> Result<Group> {
    // Covers the name fields only, and readers scan tags rather than skip by it.
    let _block_length = reader.read_i32::<BigEndian>()?;
    let name = read_name(reader)?;

    Ok(Group {
        name,
        colors: Vec::new(),
    })
}

/// Collect color blocks into an open group until its end marker.
///
/// Returns the number of blocks consumed, the end marker included, so the caller can
/// keep its flat block accounting.
fn read_group_colors<R: Read>(reader: &mut R, group: &mut Group) -> Result<i32> {
    let mut consumed = 0;
    loop {
        let tag = reader.read_u16::<BigEndian>()?;
        consumed += 1;
        match tag {
            BLOCK_COLOR => group.colors.push(read_color(reader)?),
            BLOCK_GROUP_END => return Ok(consumed),
            other => return Err(Error::UnknownBlockTag(other)),
        }
    }
}

/// Read one color block, after its tag has been consumed.
fn read_color<R: Read>(reader: &mut R) -> Result<Color> {
    let _block_length = reader.read_i32::<BigEndian>()?;
    let name = read_name(reader)?;

    let mut tag = [0u8; 4];
    reader.read_exact(&mut tag)?;
    let model = ColorModel::from_tag(tag)?;

    let mut values = Vec::with_capacity(model.channel_count());
    for _ in 0..model.channel_count() {
        values.push(reader.read_f32::<BigEndian>()?);
    }

    let kind = ColorType::from_tag(reader.read_u16::<BigEndian>()?)?;

    Ok(Color {
        name,
        model,
        values,
        kind,
    })
}

/// Read a length-prefixed, zero-terminated UTF-16BE name.
fn read_name<R: Read>(reader: &mut R) -> Result<String> {
    let units = reader.read_u16::<BigEndian>()?;
    if units == 0 {
        return Err(Error::InvalidNameLength);
    }

    let mut buffer = Vec::with_capacity(units as usize);
    for _ in 0..units {
        buffer.push(reader.read_u16::<BigEndian>()?);
    }

    // The last unit is the zero terminator.
    buffer.pop();

    Ok(U16String::from_vec(buffer).to_string()?)
}
