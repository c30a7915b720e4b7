//! Harmonic parameter listing.

use crate::load_parameters;
use log::info;

/// Print the parameters of `param_file`, optionally re-exporting them in
/// parameter file layout.
pub fn run_params(param_file: &str, export: Option<&str>) -> anyhow::Result<()> {
    let params = load_parameters(param_file)?;
    println!("{}", params.describe());

    if let Some(path) = export {
        std::fs::write(path, params.to_param_text())?;
        info!("Parameters exported to {}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_params;
    use crate::test_util::write_param_file;
    use tide_harmonic::params::HarmonicParameters;

    #[test]
    fn test_export_reparses() {
        let dir = tempfile::tempdir().unwrap();
        let param_file = write_param_file(dir.path());
        let export = dir.path().join("export.txt");
        run_params(&param_file, Some(export.to_str().unwrap())).unwrap();

        let original: HarmonicParameters = std::fs::read_to_string(&param_file)
            .unwrap()
            .parse()
            .unwrap();
        let exported: HarmonicParameters =
            std::fs::read_to_string(&export).unwrap().parse().unwrap();
        assert_eq!(exported, original);
    }
}
