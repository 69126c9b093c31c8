use cheevos_hash_core::{HashError, HashPlan, ReadSeek, RomHasher};

/// Plain MD5 of the whole file, attempted for every file regardless of
/// extension.
#[derive(Debug, Default)]
pub struct GenericHasher;

impl GenericHasher {
    pub fn new() -> Self {
        Self
    }
}

impl RomHasher for GenericHasher {
    fn label(&self) -> &'static str {
        "plain MD5"
    }

    fn plan(
        &self,
        _reader: &mut dyn ReadSeek,
        _file_size: u64,
    ) -> Result<Option<HashPlan>, HashError> {
        Ok(Some(HashPlan::whole_file()))
    }
}
