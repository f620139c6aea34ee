// src/common/register.rs

use super::record::{DecodedRecord, Value};

/// Name of the field carrying a frame checksum.
pub const CHECKSUM_FIELD: &str = "Checksum";

/// Primitive wire types. All multi-byte types are little-endian.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FieldType {
    U8,
    U16,
    U32,
    /// IEEE-754 single precision.
    F32,
}

impl FieldType {
    /// Width of the type on the wire, in bytes.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            FieldType::U8 => 1,
            FieldType::U16 => 2,
            FieldType::U32 | FieldType::F32 => 4,
        }
    }

    /// Reads a value from exactly `width()` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly `width()` long.
    pub fn read(self, bytes: &[u8]) -> Value {
        assert_eq!(bytes.len(), self.width(), "field slice must match type width");
        match self {
            FieldType::U8 => Value::Int(u32::from(bytes[0])),
            FieldType::U16 => Value::Int(u32::from(u16::from_le_bytes([bytes[0], bytes[1]]))),
            FieldType::U32 => Value::Int(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
            FieldType::F32 => {
                Value::Float(f64::from(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])))
            }
        }
    }
}

/// One named entry of a register model.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

impl Field {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Field { name, ty }
    }
}

/// Fixed-order layout of a binary response.
///
/// Field offsets are the running sum of the preceding widths. The total size
/// is computed once at construction, models are usually `const`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RegisterModel {
    fields: &'static [Field],
    size: usize,
}

impl RegisterModel {
    pub const fn new(fields: &'static [Field]) -> Self {
        let mut size = 0;
        let mut i = 0;
        while i < fields.len() {
            size += fields[i].ty.width();
            i += 1;
        }
        RegisterModel { fields, size }
    }

    /// Total byte length of a frame.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn has_checksum(&self) -> bool {
        self.has_field(CHECKSUM_FIELD)
    }

    /// Decodes every field at its fixed offset.
    ///
    /// Returns `None` unless `raw` is exactly `size()` bytes long.
    pub fn decode(&self, raw: &[u8]) -> Option<DecodedRecord> {
        if raw.len() != self.size {
            return None;
        }

        let mut record = DecodedRecord::with_capacity(self.fields.len());
        let mut offset = 0;
        for field in self.fields {
            let width = field.ty.width();
            record.push(field.name, field.ty.read(&raw[offset..offset + width]));
            offset += width;
        }
        Some(record)
    }
}
