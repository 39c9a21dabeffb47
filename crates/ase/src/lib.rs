//! This library handles reading from and creating **ASE** palette files.
//!
//! # ASE Format Documentation
//!
//! This crate provides utilities to read and create files in the **ASE** (Adobe Swatch
//! Exchange) format, the binary palette format used to move named colors between Adobe
//! applications. An ASE file stores a flat sequence of tagged blocks: bare color entries,
//! and groups of colors delimited by start/end marker blocks. ASE files are typically
//! identified with the `.ase` extension.
//!
//! ## File Structure
//!
//! An ASE file consists of a fixed header followed by a sequence of tagged blocks.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Signature              | 4 bytes: ASCII "ASEF"                                      |
//! | 0x0004         | Version                | 2x2 bytes: major and minor version, fixed at 1.0           |
//! | 0x0008         | Block Count            | 4 bytes: Flat count of all blocks in the file              |
//!
//! ### Header
//!
//! - **Signature**: A 4-byte identifier set to the ASCII bytes `ASEF`. This helps identify
//!   the file type.
//! - **Version**: Two 2-byte unsigned integers for the major and minor format version. The
//!   only revision in the wild is 1.0, and it is the only one this crate accepts.
//! - **Block Count**: A 4-byte signed integer counting every tagged block in the file. The
//!   count is flat: a group contributes one block for its start marker, one per contained
//!   color, and one for its end marker.
//!
//! ### Color Blocks
//!
//! Each color entry is stored as a tagged block with the following structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Tag                    | 2 bytes: Fixed value 0x0001                             |
//! | 0x0002         | Block Length           | 4 bytes: Byte length of the remainder of the block      |
//! | 0x0006         | Name Length            | 2 bytes: UTF-16 code units, including the terminator    |
//! | 0x0008         | Name                   | (Name Length * 2) bytes: UTF-16BE, zero-terminated      |
//! | ...            | Model                  | 4 bytes: "RGB ", "CMYK", "LAB " or "Gray"               |
//! | ...            | Values                 | 4 bytes per channel: IEEE-754 float, big-endian         |
//! | ...            | Type                   | 2 bytes: 0 = Global, 1 = Spot, 2 = Normal               |
//!
//! The number of channel values is fixed by the model: three for RGB and LAB, four for
//! CMYK, one for Gray.
//!
//! ### Group Blocks
//!
//! A group is a named run of color blocks bracketed by marker blocks:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Start Tag              | 2 bytes: Fixed value 0xC001                             |
//! | 0x0002         | Block Length           | 4 bytes: Byte length of the name fields only            |
//! | 0x0006         | Name Length            | 2 bytes: UTF-16 code units, including the terminator    |
//! | 0x0008         | Name                   | (Name Length * 2) bytes: UTF-16BE, zero-terminated      |
//! | ...            | Color Blocks           | Zero or more color blocks, each with its own tag        |
//! | ...            | End Tag                | 2 bytes: Fixed value 0xC002, no length field            |
//!
//! A group's block length covers only its own name fields, not the contained color
//! blocks. This is a quirk of the format itself: readers locate a group's children by
//! scanning block tags until the end marker, never by skipping the length field. This
//! crate reproduces that layout exactly so its output matches files produced by Adobe
//! applications.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.ase`
//! - **Endianness**: Big-endian for all multi-byte integers and floats
//! - **Strings**: UTF-16BE with a single zero terminator; length fields count code units
//!

pub mod error;
pub mod read;
pub mod types;
pub mod write;

pub use read::{decode, decode_file};
pub use types::{AseFile, Color, ColorModel, ColorType, Entry, Group};
pub use write::encode;
