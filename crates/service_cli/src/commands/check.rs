//! Check command implementation
//!
//! Validates a request without pricing it: the request is loaded through the
//! same layers as `price`, the market objects are built, and the jump
//! parameters are extracted.

use std::path::Path;

use pricer_pricing::jump_diffusion::JumpParameters;
use tracing::info;

use crate::config::{build_config, CliOverrides, PricingRequest};
use crate::market::{engine_config, jump_arguments};
use crate::{CliError, Result};

/// Extract the mixture parameters a request would price with
pub fn inspect(request: &PricingRequest) -> Result<JumpParameters> {
    engine_config(&request.engine)?;
    let args = jump_arguments(request)?;
    Ok(JumpParameters::extract(&args)?)
}

/// Run the check command
pub fn run(request_path: &str) -> Result<()> {
    let path = Path::new(request_path);
    if !path.exists() {
        return Err(CliError::FileNotFound(request_path.to_string()));
    }

    let request = build_config(path, &CliOverrides::default())?;
    let params = inspect(&request)?;
    info!("Request {} is valid", request_path);

    println!("Request:            {}", request_path);
    println!("Time to expiry:     {:.6}", params.t);
    println!("Jump compensator k: {:.8}", params.k);
    println!("Poisson mean λ't:   {:.8}", params.poisson_mean());
    println!(
        "Engine:             accuracy {:e}, max {} terms, parallel {}",
        request.engine.relative_accuracy, request.engine.max_iterations, request.engine.parallel
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::PricingError;

    const SAMPLE: &str = include_str!("../../requests/merton_call.toml");

    #[test]
    fn test_inspect_sample() {
        let request = PricingRequest::from_toml(SAMPLE).unwrap();
        let params = inspect(&request).unwrap();

        let k = (-0.1f64 + 0.5 * 0.04).exp() - 1.0;
        assert_relative_eq!(params.k, k, epsilon = 1e-15);
        assert_relative_eq!(params.t, 1.0, epsilon = 1e-15);
        assert_relative_eq!(params.poisson_mean(), 1.0 + k, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_intensity_rejected() {
        let mut request = PricingRequest::from_toml(SAMPLE).unwrap();
        request.market.jumps.intensity = -1.0;
        assert!(matches!(
            inspect(&request),
            Err(CliError::Pricing(PricingError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_missing_request_file() {
        assert!(matches!(
            run("/nonexistent/request.toml"),
            Err(CliError::FileNotFound(_))
        ));
    }
}
