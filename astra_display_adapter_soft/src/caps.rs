/// Capability tables backing the soft adapter
///
/// Everything the soft adapter answers comes from these tables; there
/// is no hidden behavior. Profiles are plain data and can be edited
/// freely before constructing the adapter.

use rustc_hash::{FxHashMap, FxHashSet};

use astra_display::astra::adapter::{
    CreateFlags, DisplayMode, Format, Multisample, WindowHandle,
};

/// Capability profile for a [`SoftAdapter`]
///
/// The profile models a single adapter and device kind; the
/// `adapter_index`/`device_kind` arguments of the trait queries are
/// accepted and ignored.
///
/// [`SoftAdapter`]: crate::SoftAdapter
#[derive(Debug, Clone)]
pub struct SoftAdapterCaps {
    /// Native modes per display format
    pub modes: FxHashMap<Format, Vec<DisplayMode>>,
    /// (display, depth) pairs usable as depth/stencil surfaces
    pub depth_surfaces: FxHashSet<(Format, Format)>,
    /// (display, backbuffer, depth) pairings accepted together
    pub depth_matches: FxHashSet<(Format, Format, Format)>,
    /// (display, backbuffer, windowed) combinations the device drives
    pub device_types: FxHashSet<(Format, Format, bool)>,
    /// (surface, samples) to available quality-level count
    pub multisample: FxHashMap<(Format, Multisample), u32>,
    /// Current monitor refresh rate in Hz
    pub refresh_rate: u32,
    /// Whether hardware transform and lighting is exposed
    pub hardware_tnl: bool,
    /// The window with input focus, if any
    pub focused_window: Option<WindowHandle>,
    /// Vertex-processing tiers whose creation attempts fail
    pub failing_tiers: CreateFlags,
}

impl SoftAdapterCaps {
    /// An empty profile that answers no to everything
    pub fn empty() -> Self {
        Self {
            modes: FxHashMap::default(),
            depth_surfaces: FxHashSet::default(),
            depth_matches: FxHashSet::default(),
            device_types: FxHashSet::default(),
            multisample: FxHashMap::default(),
            refresh_rate: 60,
            hardware_tnl: false,
            focused_window: None,
            failing_tiers: CreateFlags::empty(),
        }
    }

    /// A profile modelling a common desktop adapter
    ///
    /// 32-bit and 16-bit display formats with the usual resolutions,
    /// D24-class depth formats under the 32-bit display, 16-bit depth
    /// formats under the 16-bit displays, 2x/4x multisampling on the
    /// 32-bit formats, hardware T&L, one focused window, 60 Hz.
    pub fn typical() -> Self {
        let mut caps = Self::empty();
        caps.hardware_tnl = true;
        caps.focused_window = Some(WindowHandle::from_raw(1));

        let resolutions = [
            (640u32, 480u32),
            (800, 600),
            (1024, 768),
            (1280, 1024),
            (1920, 1080),
        ];

        // Native modes: the 32-bit display format at 60 and 75 Hz,
        // the 16-bit ones at 60 Hz only
        let mut modes_32 = Vec::new();
        for (width, height) in resolutions {
            for refresh_rate in [60, 75] {
                modes_32.push(DisplayMode {
                    width,
                    height,
                    refresh_rate,
                    format: Format::X8R8G8B8,
                });
            }
        }
        caps.modes.insert(Format::X8R8G8B8, modes_32);

        for display in [Format::X1R5G5B5, Format::R5G6B5] {
            let modes: Vec<DisplayMode> = resolutions
                .iter()
                .map(|&(width, height)| DisplayMode {
                    width,
                    height,
                    refresh_rate: 60,
                    format: display,
                })
                .collect();
            caps.modes.insert(display, modes);
        }

        // Device-type support for the whole preference table, windowed
        // and fullscreen
        let pairs = [
            (Format::X8R8G8B8, Format::A8R8G8B8),
            (Format::X8R8G8B8, Format::X8R8G8B8),
            (Format::X1R5G5B5, Format::A1R5G5B5),
            (Format::X1R5G5B5, Format::X1R5G5B5),
            (Format::R5G6B5, Format::R5G6B5),
        ];
        for (display, backbuffer) in pairs {
            for windowed in [false, true] {
                caps.device_types.insert((display, backbuffer, windowed));
            }
        }

        // Depth surfaces and pairings
        let depth_32 = [Format::D24S8, Format::D24X8, Format::D16];
        let depth_16 = [Format::D15S1, Format::D16];
        for depth in depth_32 {
            caps.depth_surfaces.insert((Format::X8R8G8B8, depth));
        }
        for display in [Format::X1R5G5B5, Format::R5G6B5] {
            for depth in depth_16 {
                caps.depth_surfaces.insert((display, depth));
            }
        }
        for (display, backbuffer) in pairs {
            let depths: &[Format] = if display == Format::X8R8G8B8 {
                &depth_32
            } else {
                &depth_16
            };
            for &depth in depths {
                caps.depth_matches.insert((display, backbuffer, depth));
            }
        }

        // 2x/4x multisampling on the 32-bit color and depth formats
        for surface in [
            Format::A8R8G8B8,
            Format::X8R8G8B8,
            Format::D24S8,
            Format::D24X8,
        ] {
            caps.multisample.insert((surface, Multisample::X2), 4);
            caps.multisample.insert((surface, Multisample::X4), 2);
        }

        caps
    }
}
