use anyhow::{anyhow, bail, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use ndgrid::{Grid, OwnedGrid};
use ndgrid_cli::config::{load_grid_config, GridConfig};
use ndgrid_cli::util::{parse_coords, parse_shape, parse_values};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("NDGRID_LOG", "error,ndgrid=info"),
    )
    .init();

    let matches = Command::new("ndgrid")
        .version(clap::crate_version!())
        .about("Dense fixed-rank array demos: build, fill, and inspect grids")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Build a grid from explicit values, a fill value, or a config file, and print it")
                .arg(
                    Arg::new("shape")
                        .short('s')
                        .long("shape")
                        .help("Grid shape as per-axis extents, e.g. 3x2 or 2x3x4 (ranks 1-4)")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("values")
                        .short('v')
                        .long("values")
                        .help(
                            "Comma-separated row-major values; the count must \
                             match the shape's element count exactly",
                        )
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("fill")
                        .short('f')
                        .long("fill")
                        .help("Set every element to this value")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(
                            "Path to a JSON grid config. Flags given on the \
                             command line override the config file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("at")
                        .long("at")
                        .help("Read back one element, e.g. --at 1,1")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Fill a grid of the given shape with uniform random values and print it")
                .arg(
                    Arg::new("shape")
                        .short('s')
                        .long("shape")
                        .help("Grid shape as per-axis extents, e.g. 3x2 (ranks 1-4)")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for reproducible output; omit for entropy")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("show", sub_m)) => run_show(sub_m),
        Some(("random", sub_m)) => run_random(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn resolve_config(matches: &ArgMatches) -> Result<GridConfig> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[ndgrid::show] loading grid config from {:?}", config_path);
        load_grid_config(config_path)?
    } else if matches.get_one::<String>("shape").is_none() {
        eprintln!("[ndgrid::show] no shape or config given; using the built-in demo config");
        GridConfig::default()
    } else {
        GridConfig {
            shape: Vec::new(),
            fill: None,
            values: None,
        }
    };

    if let Some(shape) = matches.get_one::<String>("shape") {
        config.shape = parse_shape(shape)?;
    }
    if let Some(values) = matches.get_one::<String>("values") {
        config.values = Some(parse_values(values)?);
    }
    if let Some(fill) = matches.get_one::<f64>("fill") {
        config.fill = Some(*fill);
    }

    if config.shape.is_empty() {
        bail!("a shape is required (pass --shape or --config)");
    }
    Ok(config)
}

fn run_show(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let at = matches
        .get_one::<String>("at")
        .map(|text| parse_coords(text))
        .transpose()?;

    match config.shape.len() {
        1 => show_rank::<1>(&config, at.as_deref()),
        2 => show_rank::<2>(&config, at.as_deref()),
        3 => show_rank::<3>(&config, at.as_deref()),
        4 => show_rank::<4>(&config, at.as_deref()),
        rank => bail!("supported ranks are 1 through 4 (got rank {})", rank),
    }
}

fn show_rank<const N: usize>(config: &GridConfig, at: Option<&[usize]>) -> Result<()> {
    let dims: [usize; N] = config.shape.clone().try_into().expect("rank checked by caller");
    let grid: OwnedGrid<f64, N> = match (&config.values, config.fill) {
        (Some(values), _) => Grid::from_shape_vec(dims, values.clone())?,
        (None, Some(fill)) => Grid::from_elem(dims, fill),
        (None, None) => Grid::zeros(dims),
    };
    log::info!(
        "[ndgrid::show] built a rank {} grid of {} elements",
        grid.rank(),
        grid.size()
    );
    print!("{}", grid);

    if let Some(coords) = at {
        let coords: [usize; N] = coords.to_vec().try_into().map_err(|_| {
            anyhow!("--at must name one coordinate per axis ({} expected)", N)
        })?;
        match grid.get(coords) {
            Some(value) => println!("element at {:?} = {}", coords, value),
            None => bail!(
                "coordinate {:?} is out of bounds for shape {:?}",
                coords,
                grid.shape()
            ),
        }
    }
    Ok(())
}

fn run_random(matches: &ArgMatches) -> Result<()> {
    let shape = parse_shape(matches.get_one::<String>("shape").unwrap())?;
    let seed = matches.get_one::<u64>("seed").copied();

    match shape.len() {
        1 => random_rank::<1>(&shape, seed),
        2 => random_rank::<2>(&shape, seed),
        3 => random_rank::<3>(&shape, seed),
        4 => random_rank::<4>(&shape, seed),
        rank => bail!("supported ranks are 1 through 4 (got rank {})", rank),
    }
}

fn random_rank<const N: usize>(shape: &[usize], seed: Option<u64>) -> Result<()> {
    let dims: [usize; N] = shape.to_vec().try_into().expect("rank checked by caller");
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut grid: OwnedGrid<f64, N> = Grid::zeros(dims);
    for value in grid.iter_mut() {
        *value = rng.gen_range(0.0..1.0);
    }
    log::info!(
        "[ndgrid::random] filled a rank {} grid of {} elements",
        grid.rank(),
        grid.size()
    );
    print!("{}", grid);
    Ok(())
}
