//! clap derive adapter: `VersionArgs`.

use std::io::Write;

use clap::Args;
use tracing::debug;

use proj_meta_core::domain::{DisplayMode, ProjectIdentity};

use crate::{
    error::{AdapterError, AdapterResult},
    output::write_version,
};

/// Flags of the `version` subcommand.
///
/// All four flags belong to one group that allows a single member, so clap
/// reports a conflict when more than one is passed. With none, the full
/// `name version` line is printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
#[group(id = "display-mode", multiple = false)]
pub struct VersionArgs {
    /// Output only the semantic version.
    #[arg(short = 's', long = "short")]
    pub short: bool,

    /// Show the major version.
    #[arg(long = "major")]
    pub major: bool,

    /// Show the major and minor version.
    #[arg(long = "major-minor")]
    pub major_minor: bool,

    /// Show the prerelease version.
    ///
    /// Prints nothing at all for a release version.
    #[arg(long = "prerelease", visible_alias = "pre-release")]
    pub prerelease: bool,
}

impl VersionArgs {
    /// The single display mode these flags select.
    pub fn mode(&self) -> AdapterResult<DisplayMode> {
        let selected: Vec<(&'static str, DisplayMode)> = [
            (self.short, "short", DisplayMode::Short),
            (self.major, "major", DisplayMode::Major),
            (self.major_minor, "major-minor", DisplayMode::MajorMinor),
            (self.prerelease, "prerelease", DisplayMode::Prerelease),
        ]
        .into_iter()
        .filter(|(on, _, _)| *on)
        .map(|(_, flag, mode)| (flag, mode))
        .collect();

        match selected.as_slice() {
            [] => Ok(DisplayMode::Full),
            [(_, mode)] => Ok(*mode),
            many => Err(AdapterError::ConflictingFlags {
                flags: many.iter().map(|(flag, _)| *flag).collect(),
            }),
        }
    }

    /// Print `identity` for the selected mode to `out`.
    pub fn run<W: Write>(&self, identity: &ProjectIdentity, out: &mut W) -> AdapterResult<()> {
        let mode = self.mode()?;
        debug!(%mode, "rendering version");
        write_version(identity, mode, out)
    }
}

impl From<DisplayMode> for VersionArgs {
    fn from(mode: DisplayMode) -> Self {
        Self {
            short: mode == DisplayMode::Short,
            major: mode == DisplayMode::Major,
            major_minor: mode == DisplayMode::MajorMinor,
            prerelease: mode == DisplayMode::Prerelease,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    #[command(name = "integrity")]
    struct Harness {
        #[command(flatten)]
        version: VersionArgs,
    }

    fn parse(args: &[&str]) -> Result<VersionArgs, clap::Error> {
        Harness::try_parse_from(std::iter::once("integrity").chain(args.iter().copied()))
            .map(|h| h.version)
    }

    #[test]
    fn verify_harness_structure() {
        use clap::CommandFactory;
        Harness::command().debug_assert();
    }

    #[test]
    fn no_flag_means_full() {
        assert_eq!(parse(&[]).unwrap().mode().unwrap(), DisplayMode::Full);
    }

    #[test]
    fn each_flag_selects_its_mode() {
        let cases = [
            (&["--short"][..], DisplayMode::Short),
            (&["-s"][..], DisplayMode::Short),
            (&["--major"][..], DisplayMode::Major),
            (&["--major-minor"][..], DisplayMode::MajorMinor),
            (&["--prerelease"][..], DisplayMode::Prerelease),
            (&["--pre-release"][..], DisplayMode::Prerelease),
        ];
        for (args, expected) in cases {
            assert_eq!(parse(args).unwrap().mode().unwrap(), expected, "{args:?}");
        }
    }

    #[test]
    fn clap_rejects_two_flags() {
        let err = parse(&["--short", "--major"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn programmatic_conflict_is_rejected() {
        let args = VersionArgs {
            major: true,
            prerelease: true,
            ..Default::default()
        };
        match args.mode() {
            Err(AdapterError::ConflictingFlags { flags }) => {
                assert_eq!(flags, vec!["major", "prerelease"]);
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn from_mode_round_trips() {
        assert_eq!(
            VersionArgs::from(DisplayMode::MajorMinor).mode().unwrap(),
            DisplayMode::MajorMinor
        );
        assert_eq!(VersionArgs::from(DisplayMode::Full), VersionArgs::default());
    }

    #[test]
    fn run_writes_expected_lines() {
        let identity = ProjectIdentity::new("marquee-moon", "v19.7.7-dev").unwrap();
        let cases = [
            (&[][..], "marquee-moon v19.7.7-dev\n"),
            (&["--short"][..], "v19.7.7-dev\n"),
            (&["--prerelease"][..], "dev\n"),
            (&["--major"][..], "19\n"),
            (&["--major-minor"][..], "19.7\n"),
        ];
        for (args, expected) in cases {
            let mut buf = Vec::new();
            parse(args).unwrap().run(&identity, &mut buf).unwrap();
            assert_eq!(String::from_utf8(buf).unwrap(), expected, "{args:?}");
        }
    }
}
