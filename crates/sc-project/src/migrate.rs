//! Study schema migration framework.

use crate::ProjectError;
use crate::schema::Study;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut study: Study) -> Result<Study, ProjectError> {
    while study.version < LATEST_VERSION {
        study = migrate_one_version(study)?;
    }
    Ok(study)
}

fn migrate_one_version(study: Study) -> Result<Study, ProjectError> {
    match study.version {
        0 => migrate_v0_to_v1(study),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

fn migrate_v0_to_v1(mut study: Study) -> Result<Study, ProjectError> {
    // v0 files predate the stacking and lithiation blocks; serde defaults
    // already fill those, so the bump is the whole migration.
    study.version = 1;
    Ok(study)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrate_latest_is_noop() {
        let study = Study::reference("noop");
        let migrated = migrate_to_latest(study.clone()).unwrap();
        assert_eq!(migrated, study);
    }

    #[test]
    fn migrate_v0_bumps_version() {
        let mut study = Study::reference("old");
        study.version = 0;
        let migrated = migrate_to_latest(study).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
    }
}
