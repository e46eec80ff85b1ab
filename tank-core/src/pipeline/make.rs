use std::path::Path;

use anyhow::Context as _;

use crate::{
    assets::decode::load_gray,
    effects::{
        darken::{darken, darken_parallel},
        merge::{merge, merge_parallel},
    },
    encode::png::write_png,
    foundation::{
        core::{CompositeImage, GrayMatrix, Role},
        error::{TankError, TankResult},
    },
    layout::unify::unify,
    pipeline::config::{MakeConfig, Threading},
};

/// Load, composite and write the tank image for `top` over `bottom`.
///
/// Pipeline:
/// 1. [`load_gray`] + darken the top layer
/// 2. [`load_gray`] + darken the bottom layer
/// 3. [`unify`] both onto one canvas
/// 4. [`merge`] into a [`CompositeImage`]
/// 5. [`write_png`] to `output`
///
/// `output` is used as given; see [`MakeConfig::new`] for `.png` normalization.
pub fn make(
    top: impl AsRef<Path>,
    bottom: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> TankResult<()> {
    let cfg = MakeConfig {
        top: top.as_ref().to_path_buf(),
        bottom: bottom.as_ref().to_path_buf(),
        output: output.as_ref().to_path_buf(),
        threading: Threading::default(),
    };
    make_with_config(&cfg)
}

/// [`make`] driven by an explicit [`MakeConfig`].
#[tracing::instrument(skip_all, fields(
    top = %cfg.top.display(),
    bottom = %cfg.bottom.display(),
    output = %cfg.output.display()
))]
pub fn make_with_config(cfg: &MakeConfig) -> TankResult<()> {
    let pool = build_thread_pool(&cfg.threading)?;
    let parallel = cfg.threading.parallel;
    let img = in_pool(pool.as_ref(), || -> TankResult<CompositeImage> {
        let mut top = load_gray(&cfg.top)?;
        darken_layer(&mut top, Role::Top, parallel);
        let mut bottom = load_gray(&cfg.bottom)?;
        darken_layer(&mut bottom, Role::Bottom, parallel);
        unify_and_merge(&top, &bottom, parallel)
    })?;
    write_png(&img, &cfg.output)
}

/// Darken, unify and merge two already-decoded layers, without any file IO.
pub fn composite(
    mut top: GrayMatrix,
    mut bottom: GrayMatrix,
    threading: &Threading,
) -> TankResult<CompositeImage> {
    let pool = build_thread_pool(threading)?;
    let parallel = threading.parallel;
    in_pool(pool.as_ref(), move || {
        darken_layer(&mut top, Role::Top, parallel);
        darken_layer(&mut bottom, Role::Bottom, parallel);
        unify_and_merge(&top, &bottom, parallel)
    })
}

fn in_pool<R: Send>(pool: Option<&rayon::ThreadPool>, f: impl FnOnce() -> R + Send) -> R {
    match pool {
        Some(pool) => pool.install(f),
        None => f(),
    }
}

fn darken_layer(matrix: &mut GrayMatrix, role: Role, parallel: bool) {
    if parallel {
        darken_parallel(matrix, role);
    } else {
        darken(matrix, role);
    }
}

fn unify_and_merge(
    top: &GrayMatrix,
    bottom: &GrayMatrix,
    parallel: bool,
) -> TankResult<CompositeImage> {
    let (top, bottom) = unify(top, bottom)?;
    if parallel {
        merge_parallel(&top, &bottom)
    } else {
        merge(&top, &bottom)
    }
}

fn build_thread_pool(threading: &Threading) -> TankResult<Option<rayon::ThreadPool>> {
    if let Some(n) = threading.threads
        && n == 0
    {
        return Err(TankError::validation(
            "threading 'threads' must be >= 1 when set",
        ));
    }
    if !threading.parallel {
        return Ok(None);
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threading.threads {
        builder = builder.num_threads(n);
    }
    let pool = builder.build().context("build rayon thread pool")?;
    Ok(Some(pool))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/make.rs"]
mod tests;
