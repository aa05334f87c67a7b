use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no WebGPU adapter")]
    NoAdapter,
    #[error("request_device error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

impl RenderError {
    /// Surface went stale (resize, tab switch); reconfigure and try the next frame.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)
        )
    }

    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RenderError::Surface(wgpu::SurfaceError::OutOfMemory)
                | RenderError::NoAdapter
                | RenderError::RequestDevice(_)
                | RenderError::CreateSurface(_)
        )
    }
}
