use thiserror::Error;

/// A raw value given to [`StrongEnum::from_value`](crate::StrongEnum::from_value)
/// is not one of the values declared for the enum.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("invalid enum value {0:?}")]
pub struct InvalidEnumValue<V>(pub(crate) V);

impl<V> InvalidEnumValue<V> {
    /// The rejected raw value.
    pub fn value(&self) -> &V {
        &self.0
    }

    pub fn into_value(self) -> V {
        self.0
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::int(InvalidEnumValue(3).to_string(), "invalid enum value 3")]
    #[case::negative(InvalidEnumValue(-1).to_string(), "invalid enum value -1")]
    #[case::byte(InvalidEnumValue(b'q').to_string(), "invalid enum value 113")]
    #[case::char(InvalidEnumValue('q').to_string(), "invalid enum value 'q'")]
    fn display(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(expected, actual);
    }

    #[test]
    fn carries_value() {
        let err = InvalidEnumValue(42u16);
        assert_eq!(&42, err.value());
        assert_eq!(42, err.into_value());
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(InvalidEnumValue(7i32));
        assert_eq!("invalid enum value 7", err.to_string());
    }
}
