use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, span, Level};

use crate::domain::solution::best_individual;
use crate::domain::types::{Individual, SearchSpace};
use crate::evaluation::fitness::Objective;
use crate::solver::genetic::operators::{Crossover, Mutation};
use crate::solver::genetic::population::init_population;
use crate::solver::genetic::selection::Selection;
use crate::solver::genetic::GaConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    /// Individuals (re)evaluated in this generation.
    pub evaluations: usize,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub best: Individual,
    pub population: Vec<Individual>,
    /// Generation 0 is the initial population.
    pub history: Vec<GenerationStats>,
}

/// Score every individual whose fitness is stale. Returns how many were scored.
pub fn evaluate_population<O: Objective>(population: &mut [Individual], objective: &O) -> usize {
    let stale = population.iter().filter(|ind| !ind.is_evaluated()).count();

    population
        .par_iter_mut()
        .filter(|ind| !ind.is_evaluated())
        .for_each(|ind| ind.fitness = Some(objective.evaluate(&ind.genes)));

    stale
}

/// Crossover over consecutive pairs, then mutation per offspring.
/// Anything touched loses its fitness.
pub fn vary<C: Crossover, M: Mutation, R: Rng>(
    offspring: &mut [Individual],
    crossover: &C,
    mutation: &M,
    config: &GaConfig,
    rng: &mut R,
) {
    for i in (1..offspring.len()).step_by(2) {
        if rng.gen::<f64>() < config.crossover_prob {
            let (left, right) = offspring.split_at_mut(i);
            let (a, b) = (&mut left[i - 1], &mut right[0]);
            crossover.mate(&mut a.genes, &mut b.genes, rng);
            a.invalidate();
            b.invalidate();
        }
    }

    for ind in offspring.iter_mut() {
        if rng.gen::<f64>() < config.mutation_prob {
            mutation.mutate(&mut ind.genes, rng);
            ind.invalidate();
        }
    }
}

fn summarize(generation: usize, evaluations: usize, population: &[Individual]) -> GenerationStats {
    let scores: Vec<f64> = population.iter().map(Individual::score).collect();
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = if scores.is_empty() {
        f64::NAN
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    GenerationStats {
        generation,
        evaluations,
        min,
        avg,
        max,
    }
}

/// Generational search without elitism: select, vary, re-evaluate, replace.
/// The answer is the best member of the final population, penalised or not.
pub fn evolve<O, C, M, S, R>(
    config: &GaConfig,
    space: &SearchSpace,
    objective: &O,
    crossover: &C,
    mutation: &M,
    selection: &S,
    rng: &mut R,
) -> EvolutionOutcome
where
    O: Objective,
    C: Crossover,
    M: Mutation,
    S: Selection,
    R: Rng,
{
    let loop_span = span!(
        Level::INFO,
        "genetic_search",
        population = config.population_size,
        generations = config.generations
    );
    let _loop_guard = loop_span.enter();

    let mut population = init_population(config.population_size, space, rng);
    let evaluations = evaluate_population(&mut population, objective);

    let mut history = vec![summarize(0, evaluations, &population)];
    log_generation(&history[0]);

    for generation in 1..=config.generations {
        let mut offspring = selection.select(&population, population.len(), rng);
        vary(&mut offspring, crossover, mutation, config, rng);
        let evaluations = evaluate_population(&mut offspring, objective);

        population = offspring;
        let stats = summarize(generation, evaluations, &population);
        log_generation(&stats);
        history.push(stats);
    }

    // population_size >= 1 is enforced by GaConfig::validate
    let best = best_individual(&population)
        .cloned()
        .unwrap_or_else(|| Individual::new(vec![]));
    info!(
        "Search finished: best fitness {:.6}, genes {:?}",
        best.score(),
        best.genes
    );

    EvolutionOutcome {
        best,
        population,
        history,
    }
}

fn log_generation(stats: &GenerationStats) {
    info!(
        "gen {:>2} nevals {:>3} min {:.6} avg {:.3} max {:.3}",
        stats.generation, stats.evaluations, stats.min, stats.avg, stats.max
    );
    debug!("{:?}", stats);
}
