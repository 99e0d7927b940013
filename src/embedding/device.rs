use candle_core::Device;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

use super::error::EmbeddingError;

/// Picks the compute device for the encoder.
///
/// GPU backends are only attempted when compiled in (`metal` / `cuda` features) and
/// `allow_gpu` is set; every failure falls back to CPU.
pub fn select_device(allow_gpu: bool) -> Result<Device, EmbeddingError> {
    if !allow_gpu {
        debug!("GPU disabled by configuration, using CPU");
        return Ok(Device::Cpu);
    }

    #[cfg(any(feature = "metal", feature = "cuda"))]
    let mut failures: Vec<String> = Vec::new();

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    let failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => {
                info!("Using Metal GPU acceleration");
                return Ok(device);
            }
            Err(e) => {
                warn!(error = %e, "Metal device unavailable");
                failures.push(format!("metal failed: {e}"));
            }
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!("Using CUDA GPU acceleration");
                return Ok(device);
            }
            Err(e) => {
                warn!(error = %e, "CUDA device unavailable");
                failures.push(format!("cuda failed: {e}"));
            }
        }
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, using CPU");
    } else {
        warn!(reason = %failures.join("; "), "Falling back to CPU device");
    }

    Ok(Device::Cpu)
}
