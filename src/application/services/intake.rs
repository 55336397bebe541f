/// Size gate over the uploaded byte blob. Nothing downstream runs when it
/// rejects.
#[derive(Debug, Clone, Copy)]
pub struct Intake {
    max_bytes: usize,
}

impl Intake {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn check(&self, data: &[u8]) -> Result<(), IntakeError> {
        if data.len() > self.max_bytes {
            return Err(IntakeError::FileTooLarge {
                limit_mb: self.max_bytes / (1024 * 1024),
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("File too large! Please upload a file smaller than {limit_mb}MB.")]
    FileTooLarge { limit_mb: usize },
}
