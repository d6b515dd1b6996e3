use std::io::{self, Write};

use dotenv::dotenv;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::WITHIN_RADIUS_KM;
use crate::config::Settings;
use crate::data::{load_observations, Boundary};
use crate::domain::solution::decode_centroids;
use crate::error::LocatorError;
use crate::input::{CoordinateSource, LineInput};
use crate::report::map::{render_svg, MapScene};
use crate::report::{build_report, write_report, PlacementReport};
use crate::setup::setup;
use crate::solver::genetic::{evolve, GaussianMutation, Tournament, TwoPointCrossover};

/// Initialize tracing and environment. Logs go to stderr so stdout carries only the report.
pub fn init_tracing_and_env() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

pub fn run() -> Result<(), LocatorError> {
    init_tracing_and_env();
    let settings = Settings::from_env()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = LineInput::new(stdin.lock(), io::stdout());
    let mut out = stdout.lock();

    run_with(&settings, &mut input, &mut out)?;
    Ok(())
}

/// One full placement run: load, ask, optimise, filter, report, draw.
pub fn run_with<I, W>(
    settings: &Settings,
    input: &mut I,
    out: &mut W,
) -> Result<PlacementReport, LocatorError>
where
    I: CoordinateSource,
    W: Write,
{
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.worker_threads)
        .build_global()
    {
        warn!("Keeping existing worker pool: {}", e);
    }

    let observations = load_observations(&settings.observations_path)?;
    let boundary = Boundary::load(&settings.boundary_path)?;
    let user = input.read_user_location()?;

    let (problem_instance, space) = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        setup(user, &observations)?
    };

    let ga = &settings.ga;
    let mut rng = match ga.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mutation = GaussianMutation::new(ga.mutation_mu, ga.mutation_sigma, ga.gene_mutation_prob)?;
    let selection = Tournament {
        size: ga.tournament_size,
    };

    let outcome = evolve(
        ga,
        &space,
        &problem_instance,
        &TwoPointCrossover,
        &mutation,
        &selection,
        &mut rng,
    );

    let centroids = decode_centroids(&outcome.best.genes);
    let inside = boundary.filter(&centroids);
    info!(
        "{} of {} proposed access points lie inside the boundary",
        inside.len(),
        centroids.len()
    );
    if inside.is_empty() {
        return Err(LocatorError::NoCentroidsInBoundary);
    }

    let report = build_report(user, &inside, WITHIN_RADIUS_KM);
    write_report(&report, out)?;
    writeln!(out, "Done")?;
    out.flush()?;

    render_svg(
        &settings.map_output,
        &MapScene {
            observations: &observations,
            user,
            placements: &report.placements,
        },
    )?;

    Ok(report)
}
