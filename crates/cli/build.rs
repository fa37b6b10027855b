use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("seoscope")
        .version("1.0.0")
        .author("Seoscope Contributors")
        .about("Audit the SEO health of blog articles")
        .arg(clap::arg!([ARTICLE] ... "Article JSON files, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--pretty "Pretty-print JSON output"))
        .arg(
            clap::arg!(--vitals <FILE> "Core Web Vitals reading as JSON")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--lcp <MS> "Largest Contentful Paint in milliseconds"))
        .arg(clap::arg!(--fid <MS> "First Input Delay in milliseconds"))
        .arg(clap::arg!(--cls <SCORE> "Cumulative Layout Shift"))
        .arg(
            clap::arg!(--corpus <FILE> ... "Plain-text body of another article to check for duplication")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--cross_check "Compare every input article against the others for duplication").long("cross-check"))
        .arg(
            clap::arg!(--config <FILE> "Scoring configuration file")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--fail_under <SCORE> "Exit with status 2 if any article scores below this value").long("fail-under"))
        .arg(clap::arg!(--no_suggestions "Omit the suggestion list from text output").long("no-suggestions"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "seoscope", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "seoscope", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "seoscope", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "seoscope", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
