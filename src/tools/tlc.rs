//! The `check` subcommand: generate a TLC configuration and run TLC on it.
//!
//! Values given on the command line are gathered into a "flag" [`Cfg`] and
//! merged on top of the optional template, so flags win wherever both supply
//! a value. The merged configuration is written to `--out-cfg` and handed to
//! TLC together with a throwaway metadata directory.

#![expect(
    clippy::print_stdout,
    reason = "--show-cfg and --show-script print to the console on request"
)]

use std::{num::NonZeroUsize, path::Path};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::{
    AppConfig,
    CheckArgs,
    engine::{EngineRun, Invocation},
};
use crate::cfg::{Cfg, CfgError, read_template, write_cfg};

/// Collect the configuration values supplied as flags.
///
/// Repeated names collapse into the sets; a constant given twice keeps its
/// last value. An empty `--spec` is ignored.
#[must_use]
pub fn flag_cfg(args: &CheckArgs) -> Cfg {
    Cfg {
        spec: args.spec.clone().filter(|spec| !spec.is_empty()),
        invariants: args.invariants.iter().cloned().collect(),
        properties: args.properties.iter().cloned().collect(),
        constants: args
            .constants
            .chunks_exact(2)
            .filter_map(|pair| match pair {
                [name, value] => Some((name.clone(), value.clone())),
                _ => None,
            })
            .collect(),
        model_values: args.model_values.iter().cloned().collect(),
    }
}

/// Build the configuration TLC will read: the template, if any, overridden by
/// the flags.
///
/// # Errors
///
/// Returns [`CfgError::Read`] when the template cannot be read.
pub fn resolve_cfg(args: &CheckArgs) -> Result<Cfg, CfgError> {
    let base = match &args.cfg {
        Some(template) => Cfg::new().merge(&read_template(template)?),
        None => Cfg::new(),
    };
    Ok(base.merge(&flag_cfg(args)))
}

/// Worker count used when `--tlc-workers` is absent.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// TLC command line for `args`, reading `cfg_path` and keeping its state
/// under `metadir`.
#[must_use]
pub fn tlc_invocation(
    config: &AppConfig,
    args: &CheckArgs,
    cfg_path: &Path,
    metadir: &Path,
) -> Invocation {
    let workers = args.tlc_workers.map_or_else(default_workers, NonZeroUsize::get);
    let base = Invocation::new(&config.java)
        .arg("-jar")
        .arg(&config.jar)
        .arg("-workers")
        .arg(workers.to_string())
        .arg("-config")
        .arg(cfg_path)
        .arg("-metadir")
        .arg(metadir)
        .arg("-terse")
        .arg("-cleanup");
    // TLC's `-deadlock` flag turns deadlock checking off.
    let checked = if args.no_check_deadlocks {
        base.arg("-deadlock")
    } else {
        base
    };
    checked.arg(&args.spec_file)
}

/// Run the `check` subcommand.
///
/// # Errors
///
/// Returns an error if the template cannot be read, the configuration cannot
/// be written, the metadata directory cannot be created or TLC cannot be
/// launched. TLC reporting a failure is not an error; it shows up in the
/// returned [`EngineRun`].
pub async fn run(args: &CheckArgs, config: &AppConfig) -> Result<EngineRun> {
    let cfg = resolve_cfg(args)?;
    if args.show_cfg {
        println!("{cfg}");
    }
    write_cfg(&args.out_cfg, &cfg)?;
    info!(path = %args.out_cfg.display(), "wrote TLC configuration");

    // TLC creates its state directory if it is missing, so it must outlive
    // the child process.
    let state_dir = tempfile::Builder::new()
        .prefix("tlacli-states")
        .tempdir()
        .context("failed to create TLC metadata directory")?;
    let invocation = tlc_invocation(config, args, &args.out_cfg, state_dir.path());
    if args.show_script {
        println!("{invocation}");
    }
    let run = invocation.run().await?;
    if let Err(error) = state_dir.close() {
        warn!(%error, "failed to remove TLC metadata directory");
    }

    run.report();
    Ok(run)
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "test assertions")]
    use std::{ffi::OsString, path::PathBuf};

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn config() -> AppConfig {
        AppConfig {
            java: "java".to_owned(),
            jar: "tla2tools.jar".to_owned(),
        }
    }

    #[fixture]
    fn args() -> CheckArgs {
        CheckArgs {
            spec_file: PathBuf::from("Spec.tla"),
            out_cfg: PathBuf::from("temporary.cfg"),
            tlc_workers: NonZeroUsize::new(4),
            ..CheckArgs::default()
        }
    }

    #[rstest]
    fn flag_cfg_collects_sets_and_pairs(args: CheckArgs) {
        let args = CheckArgs {
            invariants: vec!["TypeOK".to_owned(), "Safe".to_owned(), "TypeOK".to_owned()],
            properties: vec!["Live".to_owned()],
            constants: vec![
                "N".to_owned(),
                "3".to_owned(),
                "N".to_owned(),
                "4".to_owned(),
                "Procs".to_owned(),
                "{p1, p2}".to_owned(),
            ],
            model_values: vec!["p1".to_owned(), "p2".to_owned()],
            ..args
        };
        let cfg = flag_cfg(&args);
        assert_eq!(cfg.spec, None);
        assert_eq!(cfg.invariants.len(), 2);
        assert!(cfg.properties.contains("Live"));
        assert_eq!(cfg.constants.get("N").map(String::as_str), Some("4"));
        assert_eq!(
            cfg.constants.get("Procs").map(String::as_str),
            Some("{p1, p2}")
        );
        assert_eq!(cfg.model_values.len(), 2);
    }

    #[rstest]
    fn flags_override_template(args: CheckArgs) {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.cfg");
        std::fs::write(
            &template,
            "SPECIFICATION Live\nINVARIANT TypeOK\nCONSTANTS \\* regular assignments\n  N = 3\n  M = 1",
        )
        .expect("write template");
        let args = CheckArgs {
            cfg: Some(template),
            invariants: vec!["Safe".to_owned()],
            constants: vec!["N".to_owned(), "5".to_owned()],
            ..args
        };

        let cfg = resolve_cfg(&args).expect("resolve");
        assert_eq!(cfg.spec.as_deref(), Some("Live"));
        assert!(cfg.invariants.contains("TypeOK"));
        assert!(cfg.invariants.contains("Safe"));
        assert_eq!(cfg.constants.get("N").map(String::as_str), Some("5"));
        assert_eq!(cfg.constants.get("M").map(String::as_str), Some("1"));
    }

    #[rstest]
    fn spec_flag_replaces_template_spec(args: CheckArgs) {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.cfg");
        std::fs::write(&template, "SPECIFICATION Live").expect("write template");
        let args = CheckArgs {
            cfg: Some(template),
            spec: Some("Safe".to_owned()),
            ..args
        };
        assert_eq!(
            resolve_cfg(&args).expect("resolve").spec.as_deref(),
            Some("Safe")
        );
    }

    #[rstest]
    fn empty_spec_flag_keeps_template_spec(args: CheckArgs) {
        let dir = tempfile::tempdir().expect("tempdir");
        let template = dir.path().join("template.cfg");
        std::fs::write(&template, "SPECIFICATION Live").expect("write template");
        let args = CheckArgs {
            cfg: Some(template),
            spec: Some(String::new()),
            ..args
        };
        assert_eq!(flag_cfg(&args).spec, None);
        let cfg = resolve_cfg(&args).expect("resolve");
        assert_eq!(cfg.to_string(), "SPECIFICATION Live");
    }

    #[rstest]
    fn shown_cfg_matches_written_file(args: CheckArgs) {
        let dir = tempfile::tempdir().expect("tempdir");
        let out_cfg = dir.path().join("out.cfg");
        let args = CheckArgs {
            invariants: vec!["TypeOK".to_owned()],
            constants: vec!["N".to_owned(), "3".to_owned()],
            model_values: vec!["p1".to_owned()],
            ..args
        };
        let cfg = resolve_cfg(&args).expect("resolve");
        write_cfg(&out_cfg, &cfg).expect("write");
        // `--show-cfg` prints the `Display` form.
        assert_eq!(
            cfg.to_string(),
            std::fs::read_to_string(&out_cfg).expect("read back")
        );
    }

    #[rstest]
    fn missing_template_is_fatal(args: CheckArgs) {
        let args = CheckArgs {
            cfg: Some(PathBuf::from("/nonexistent/template.cfg")),
            ..args
        };
        let err = resolve_cfg(&args).expect_err("missing template must fail");
        assert!(matches!(err, CfgError::Read { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn run_stops_before_launching_when_template_is_missing(
        config: AppConfig,
        args: CheckArgs,
    ) {
        let dir = tempfile::tempdir().expect("tempdir");
        let out_cfg = dir.path().join("out.cfg");
        let args = CheckArgs {
            cfg: Some(dir.path().join("absent.cfg")),
            out_cfg: out_cfg.clone(),
            ..args
        };
        let err = run(&args, &config).await.expect_err("run must fail");
        assert!(err.downcast_ref::<CfgError>().is_some());
        assert!(!out_cfg.exists());
    }

    #[rstest]
    fn invocation_matches_tlc_flags(config: AppConfig, args: CheckArgs) {
        let invocation = tlc_invocation(
            &config,
            &args,
            Path::new("temporary.cfg"),
            Path::new("/tmp/states"),
        );
        assert_eq!(
            invocation.to_string(),
            "java -jar tla2tools.jar -workers 4 -config temporary.cfg -metadir /tmp/states \
             -terse -cleanup Spec.tla"
        );
    }

    #[rstest]
    fn invocation_disables_deadlock_checking_on_request(config: AppConfig, args: CheckArgs) {
        let args = CheckArgs {
            no_check_deadlocks: true,
            ..args
        };
        let invocation = tlc_invocation(&config, &args, Path::new("a.cfg"), Path::new("m"));
        assert!(invocation.to_string().ends_with("-cleanup -deadlock Spec.tla"));
    }

    #[rstest]
    fn invocation_defaults_workers_to_available_parallelism(config: AppConfig, args: CheckArgs) {
        let args = CheckArgs {
            tlc_workers: None,
            ..args
        };
        let invocation = tlc_invocation(&config, &args, Path::new("a.cfg"), Path::new("m"));
        let expected = OsString::from(default_workers().to_string());
        let arguments = invocation.args();
        let position = arguments
            .iter()
            .position(|arg| arg == "-workers")
            .expect("workers flag present");
        assert_eq!(arguments.get(position + 1), Some(&expected));
        assert!(default_workers() >= 1);
    }
}
