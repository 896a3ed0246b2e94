pub type SortvizResult<T> = Result<T, SortvizError>;

#[derive(thiserror::Error, Debug)]
pub enum SortvizError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SortvizError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefix_is_stable() {
        assert!(
            SortvizError::validation("x")
                .to_string()
                .contains("validation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = SortvizError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
