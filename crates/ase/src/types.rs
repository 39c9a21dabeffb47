//! Base types for the structure of an ASE file.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// File signature, the ASCII bytes "ASEF".
pub const SIGNATURE: [u8; 4] = *b"ASEF";

/// The only format revision in existence, major and minor.
pub const VERSION: (u16, u16) = (1, 0);

/// Block tag for a single color entry.
pub const BLOCK_COLOR: u16 = 0x0001;

/// Block tag opening a named group.
pub const BLOCK_GROUP_START: u16 = 0xC001;

/// Block tag closing a group. Unlike the other two, this block carries no payload.
pub const BLOCK_GROUP_END: u16 = 0xC002;

/// Color model of a swatch, fixing the number and meaning of its channel values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorModel {
    /// Red, green, blue. Three channels.
    Rgb,
    /// Cyan, magenta, yellow, key. Four channels.
    Cmyk,
    /// Lightness, a, b. Three channels.
    Lab,
    /// Single lightness channel.
    Gray,
}

impl ColorModel {
    /// Number of 32-bit channel values a color of this model carries.
    pub fn channel_count(&self) -> usize {
        match self {
            ColorModel::Rgb => 3,
            ColorModel::Cmyk => 4,
            ColorModel::Lab => 3,
            ColorModel::Gray => 1,
        }
    }

    /// The 4-byte tag stored in the file. Three-letter models are padded with a space.
    pub(crate) fn tag(&self) -> [u8; 4] {
        match self {
            ColorModel::Rgb => *b"RGB ",
            ColorModel::Cmyk => *b"CMYK",
            ColorModel::Lab => *b"LAB ",
            ColorModel::Gray => *b"Gray",
        }
    }

    pub(crate) fn from_tag(tag: [u8; 4]) -> Result<Self> {
        match &tag {
            b"RGB " => Ok(ColorModel::Rgb),
            b"CMYK" => Ok(ColorModel::Cmyk),
            b"LAB " => Ok(ColorModel::Lab),
            b"Gray" => Ok(ColorModel::Gray),
            _ => Err(Error::UnknownColorModel(tag)),
        }
    }
}

/// Classification of a color entry. Does not affect the channel layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorType {
    /// A global swatch, updated everywhere when edited.
    Global,
    /// A spot color for a dedicated printing ink.
    Spot,
    /// A plain process color.
    Normal,
}

impl ColorType {
    pub(crate) fn tag(&self) -> u16 {
        match self {
            ColorType::Global => 0,
            ColorType::Spot => 1,
            ColorType::Normal => 2,
        }
    }

    pub(crate) fn from_tag(tag: u16) -> Result<Self> {
        match tag {
            0 => Ok(ColorType::Global),
            1 => Ok(ColorType::Spot),
            2 => Ok(ColorType::Normal),
            _ => Err(Error::UnknownColorType(tag)),
        }
    }
}

/// A single named color definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Name of the swatch
    pub name: String,

    /// Color model fixing how [`Color::values`] is interpreted
    pub model: ColorModel,

    /// Channel values, `model.channel_count()` of them
    pub values: Vec<f32>,

    /// Classification of the swatch
    pub kind: ColorType,
}

/// A named, ordered collection of colors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    /// Name of the group
    pub name: String,

    /// The colors contained in this group, in file order
    pub colors: Vec<Color>,
}

/// A top-level entry of an ASE file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Entry {
    /// A bare color outside any group
    Color(Color),

    /// A named group of colors
    Group(Group),
}

/// An ASE palette file.
///
/// Constructed empty (or via [`crate::read::decode`]) and populated through
/// [`AseFile::entries`], then written out with [`crate::write::encode`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AseFile {
    /// Top-level entries in file order
    pub entries: Vec<Entry>,
}

impl AseFile {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The file signature. The decoder rejects anything other than "ASEF".
    pub fn signature(&self) -> &str {
        "ASEF"
    }

    /// The format version. The decoder rejects anything other than 1.0.
    pub fn version(&self) -> String {
        format!("{}.{}", VERSION.0, VERSION.1)
    }

    /// The flat on-disk block count for this palette.
    ///
    /// A bare color contributes one block. A group contributes its start marker, one
    /// block per contained color, and its end marker.
    pub fn block_count(&self) -> i32 {
        self.entries
            .iter()
            .map(|entry| match entry {
                Entry::Color(_) => 1,
                Entry::Group(group) => 2 + group.colors.len() as i32,
            })
            .sum()
    }
}
