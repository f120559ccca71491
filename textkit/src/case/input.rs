//! Coercion of arbitrary values into the text a conversion consumes.

use serde_json::Value;
use std::borrow::Cow;

/// A value that can be read as text.
///
/// Absent values (`None`, JSON `null`) read as the empty string. Everything
/// else reads as its canonical textual form.
pub trait TextLike {
    fn to_text(&self) -> Cow<'_, str>;
}

impl TextLike for str {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextLike for String {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TextLike for Cow<'_, str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl TextLike for char {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl TextLike for bool {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

macro_rules! impl_text_like_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextLike for $ty {
                fn to_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_text_like_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: TextLike + ?Sized> TextLike for &T {
    fn to_text(&self) -> Cow<'_, str> {
        (**self).to_text()
    }
}

impl<T: TextLike> TextLike for Option<T> {
    fn to_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.to_text(),
            None => Cow::Borrowed(""),
        }
    }
}

impl TextLike for Value {
    fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Bool(b) => b.to_text(),
            Value::Number(n) => Cow::Owned(n.to_string()),
            // Arrays read element-wise, joined with commas
            Value::Array(items) => Cow::Owned(
                items
                    .iter()
                    .map(|item| item.to_text())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::Object(_) => Cow::Owned(self.to_string()),
        }
    }
}
