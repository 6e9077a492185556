//! GPU handles and the async runtime pieces are built with.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

use crate::pipelines::piece::material_layout;

/// Device, queue and (on native targets) the runtime texture loads run on.
///
/// `wgpu` handles are reference counted, so cloning a context is cheap and every
/// clone talks to the same device.
#[derive(Clone, Debug)]
pub struct Context {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    /// Shared by all piece materials so one pipeline can draw every piece.
    pub material_layout: wgpu::BindGroupLayout,
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) async_runtime: Arc<tokio::runtime::Runtime>,
}

impl Context {
    /// Wrap a device the host already owns.
    ///
    /// On native targets a single worker thread is started for texture loading.
    /// Don't drop the last clone of a context from inside another tokio runtime.
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> anyhow::Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let async_runtime = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("flow-jigsaw-loader")
                .enable_all()
                .build()?,
        );
        let material_layout = material_layout(&device);
        Ok(Self {
            device,
            queue,
            material_layout,
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime,
        })
    }

    /// Create a device without a window or surface, e.g. for tests and offline baking.
    pub async fn headless() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("flow-jigsaw device"),
                required_features: wgpu::Features::empty(),
                // WebGL doesn't support all of wgpu's features, so if
                // we're building for the web we'll have to disable some.
                required_limits: if cfg!(target_arch = "wasm32") {
                    wgpu::Limits::downlevel_webgl2_defaults()
                } else {
                    wgpu::Limits::default()
                },
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
            })
            .await?;

        Self::new(device, queue)
    }

    /// Run a future to completion in the background.
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.async_runtime.spawn(future);
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}

/// Install the logger once: `env_logger` natively, the browser console on the web.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            log::debug!("Logger already initialized: {}", e);
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::debug!("Logger already initialized: {}", e);
        }
    }
}

/// Installs the console logger as soon as the wasm module is instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_logger();
}
