use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rigmap_core::joint::Limb;
use rigmap_core::matching::AutoMapper;
use rigmap_core::normalize::PreprocessedBone;
use rigmap_core::profile::{self, MappingProfile};
use rigmap_core::report::MappingReport;
use rigmap_core::{bone_list, CanonicalJoint, PatternRegistry, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "rigmap",
    version = VERSION,
    about = "Map humanoid rig bone names onto canonical joints"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat { Text, Json, Yaml }

#[derive(Subcommand, Debug)]
enum Command {
    /// Auto-map a bone list (JSON, YAML or one name per line)
    Map {
        bones: String,
        /// Mapping profile YAML
        #[arg(long)]
        profile: Option<String>,
        /// Comma-separated joint keys to attempt (overrides the profile)
        #[arg(long, value_delimiter = ',')]
        joints: Option<Vec<String>>,
        /// Do not drop scene/armature scaffold nodes before matching
        #[arg(long)]
        keep_structural: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the stripped, normalized and token forms of bone names
    Tokenize { names: Vec<String> },
    /// List registry aliases for one joint or all of them
    Aliases { joint: Option<String> },
    /// List canonical joints grouped by limb
    Joints,
    /// Load and inspect a mapping profile
    Inspect { path: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Unknown keys are skipped with a warning rather than failing the run.
fn parse_joint_keys(keys: &[String]) -> Vec<CanonicalJoint> {
    keys.iter()
        .filter_map(|k| match k.trim().parse::<CanonicalJoint>() {
            Ok(joint) => Some(joint),
            Err(err) => {
                log::warn!("--joints: skipping {}", err);
                None
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Map { bones, profile: profile_path, joints, keep_structural, format } => {
            let mut profile = match &profile_path {
                Some(p) => {
                    profile::load_from_path(p).with_context(|| format!("loading profile {}", p))?
                }
                None => MappingProfile::default(),
            };
            if let Some(keys) = joints {
                profile.joints = Some(parse_joint_keys(&keys));
            }
            if keep_structural { profile.skip_structural = false; }

            let names = bone_list::load_from_path(&bones)
                .with_context(|| format!("reading bone list {}", bones))?;
            let names = profile.prepare_bones(&names);
            log::info!("mapping {} bone(s) with profile '{}'", names.len(), profile.name);

            let registry = profile.registry();
            let mapper = AutoMapper::new(&registry);
            let attempted = mapper.attempted_joints(profile.allowed_joints());
            let result = mapper.map(&names, profile.allowed_joints());
            log::info!("mapped {}/{} joint(s)", result.mappings.len(), result.attempted());
            if !result.is_complete() {
                log::info!("{} joint(s) left unmapped", result.unmapped_joints.len());
            }
            let report = MappingReport::new(&result, &attempted);
            match format {
                OutputFormat::Text => print!("{}", report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
            }
        }
        Command::Tokenize { names } => {
            for name in &names {
                let b = PreprocessedBone::new(name);
                println!("{}", b.original);
                println!("  stripped:   {}", b.stripped);
                println!("  normalized: {}", b.normalized);
                println!("  tokens:     [{}]", b.tokens.join(", "));
            }
        }
        Command::Aliases { joint } => {
            let registry = PatternRegistry::builtin();
            let selected: Vec<CanonicalJoint> = match joint {
                Some(key) => vec![key
                    .parse::<CanonicalJoint>()
                    .with_context(|| format!("unknown joint {}", key))?],
                None => registry.joints().collect(),
            };
            for j in selected {
                let aliases: Vec<&str> =
                    registry.aliases(j).iter().map(|a| a.original.as_str()).collect();
                println!("{}: {}", j, aliases.join(", "));
            }
        }
        Command::Joints => {
            for limb in Limb::ALL {
                let keys: Vec<&str> = limb.joints().iter().map(|j| j.key()).collect();
                println!("{}: {}", limb.name(), keys.join(", "));
            }
        }
        Command::Inspect { path } => {
            let p = profile::load_from_path(&path)
                .with_context(|| format!("loading profile {}", path))?;
            println!("Loaded profile: {}", p.name);
            match p.allowed_joints() {
                Some(js) => {
                    let keys: Vec<&str> = js.iter().map(|j| j.key()).collect();
                    println!("  joints: {}", keys.join(", "));
                }
                None => println!("  joints: all ({})", CanonicalJoint::ALL.len()),
            }
            println!("  skip_structural: {}", p.skip_structural);
            println!("  builtin_aliases: {}", p.builtin_aliases);
            for (j, aliases) in &p.extra_aliases {
                println!("  extra {}: {}", j, aliases.join(", "));
            }
            let registry = p.registry();
            println!("  registry: {} joint(s)", registry.len());
        }
    }
    Ok(())
}
