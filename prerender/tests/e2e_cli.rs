//! End-to-end CLI tests for petchain-prerender

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn prerender() -> Command {
    cargo_bin_cmd!("petchain-prerender")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        prerender()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--feature-pages"))
            .stdout(predicate::str::contains("--variant"));
    }

    #[test]
    fn shows_version() {
        prerender()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_variant() {
        prerender()
            .args(["--variant", "modal"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown page variant"));
    }
}

mod output {
    use super::*;

    #[test]
    fn writes_index_and_lists_it() {
        let dir = TempDir::new().unwrap();
        prerender()
            .arg("--out-dir")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("Scannable Pet Tags"));
        assert!(html.contains(r#"data-variant="landing""#));
    }

    #[test]
    fn classic_variant_with_everything() {
        let dir = TempDir::new().unwrap();
        prerender()
            .arg("--out-dir")
            .arg(dir.path())
            .args(["--variant", "classic", "--feature-pages", "--emit-catalog"])
            .assert()
            .success()
            .stdout(predicate::str::contains("catalog.json"))
            .stdout(predicate::str::contains("offline-mode-privacy"));

        let page =
            fs::read_to_string(dir.path().join("features/scannable-pet-tags/index.html")).unwrap();
        assert!(page.contains(r#"data-variant="classic""#));
        assert!(page.contains(r#"data-dismiss="control""#));
        assert!(dir.path().join("catalog.json").is_file());
    }

    #[test]
    fn copies_assets_dir_for_root_relative_logo() {
        let dir = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        fs::write(assets.path().join("petchain.jpeg"), b"jpeg").unwrap();

        prerender()
            .arg("--out-dir")
            .arg(dir.path())
            .arg("--assets-dir")
            .arg(assets.path())
            .arg("--feature-pages")
            .assert()
            .success()
            .stdout(predicate::str::contains("petchain.jpeg"));

        assert!(dir.path().join("assets/petchain.jpeg").is_file());
        let page =
            fs::read_to_string(dir.path().join("features/smart-notifications/index.html")).unwrap();
        assert!(page.contains(r#"src="/assets/petchain.jpeg""#));
    }

    #[test]
    fn fails_when_output_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "").unwrap();

        prerender()
            .arg("--out-dir")
            .arg(file.join("out"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to create directory"));
    }
}
