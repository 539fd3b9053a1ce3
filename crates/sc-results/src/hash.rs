//! Content-based hashing for run IDs.

use sha2::{Digest, Sha256};

/// Run id from the staged artifacts and the engine description.
///
/// Two runs with byte-identical staged inputs under the same engine get the
/// same id, so a finished workdir can be recognized without re-running.
pub fn compute_run_id(properties_json: &[u8], cell_csv: &[u8], engine: &str) -> String {
    let mut hasher = Sha256::new();

    hasher.update(properties_json);
    hasher.update(cell_csv);
    hasher.update(engine.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_stability() {
        let props = br#"{"Nx":512,"cfl":0.2}"#;
        let cell = b"layer_no,name,x\n1,case,0.0001\n";

        let hash1 = compute_run_id(props, cell, "matlab (simulate)");
        let hash2 = compute_run_id(props, cell, "matlab (simulate)");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let props = br#"{"Nx":512,"cfl":0.2}"#;
        let cell_a = b"layer_no,name,x\n1,case,0.0001\n";
        let cell_b = b"layer_no,name,x\n1,case,0.0002\n";

        let hash_a = compute_run_id(props, cell_a, "matlab (simulate)");
        let hash_b = compute_run_id(props, cell_b, "matlab (simulate)");
        let hash_c = compute_run_id(props, cell_a, "octave (simulate)");

        assert_ne!(hash_a, hash_b);
        assert_ne!(hash_a, hash_c);
    }
}
