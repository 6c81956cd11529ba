// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rolodex CLI entrypoint.
//!
//! Fetches the profile directory once, then runs the interactive TUI. If the
//! fetch fails the failure is logged and the TUI starts with an empty
//! directory; there is no retry.

use std::error::Error;

use rolodex::query::NameMatchMode;
use rolodex::session::DirectorySession;
use rolodex::source::SourceOptions;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--results <n>] [--nat <cc>] [--endpoint <url>] [--match-case]\n  {program} --demo [--match-case]\n\nFetches up to <n> profiles (default 12) from a randomuser-compatible API and\nbrowses them as a searchable card gallery.\n\n--demo uses a built-in directory and skips the network fetch; it cannot be\ncombined with --results/--nat/--endpoint.\n--match-case compares record names exactly as stored (queries are always\nlowercased before matching)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    results: Option<u16>,
    nationality: Option<String>,
    endpoint: Option<String>,
    match_case: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--results" => {
                if options.results.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let results: u16 = raw.parse().map_err(|_| ())?;
                if results == 0 {
                    return Err(());
                }
                options.results = Some(results);
            }
            "--nat" => {
                if options.nationality.is_some() {
                    return Err(());
                }
                let nationality = args.next().ok_or(())?;
                options.nationality = Some(nationality);
            }
            "--endpoint" => {
                if options.endpoint.is_some() {
                    return Err(());
                }
                let endpoint = args.next().ok_or(())?;
                options.endpoint = Some(endpoint);
            }
            "--match-case" => {
                if options.match_case {
                    return Err(());
                }
                options.match_case = true;
            }
            _ => return Err(()),
        }
    }

    if options.demo
        && (options.results.is_some() || options.nationality.is_some() || options.endpoint.is_some())
    {
        return Err(());
    }

    Ok(options)
}

fn source_options(options: &CliOptions) -> SourceOptions {
    let mut source = SourceOptions::new();
    if let Some(endpoint) = &options.endpoint {
        source = source.with_endpoint(endpoint.clone());
    }
    if let Some(results) = options.results {
        source = source.with_result_count(results);
    }
    if let Some(nationality) = &options.nationality {
        source = source.with_nationality(nationality.clone());
    }
    source
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "rolodex".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let match_mode =
            if options.match_case { NameMatchMode::Literal } else { NameMatchMode::FoldCase };

        let profiles = if options.demo {
            rolodex::tui::demo_directory()
        } else {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            match runtime.block_on(rolodex::source::fetch_directory(&source_options(&options))) {
                Ok(profiles) => profiles,
                Err(err) => {
                    // The gallery still runs, just without cards.
                    eprintln!("rolodex: directory fetch failed: {err}");
                    Vec::new()
                }
            }
        };

        let session = DirectorySession::new(profiles, match_mode);
        rolodex::tui::run_with_directory(session)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("rolodex: {err}");
        std::process::exit(1);
    }
}
