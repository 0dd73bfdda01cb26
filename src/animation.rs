//! Backdrop lifecycle: Idle → Running → Stopped
//!
//! A `Backdrop` owns every piece of per-instance state (surface, field,
//! clock, pending frame). The host drives it by calling `on_frame` and
//! `on_resize`; nothing here schedules work on its own except by asking the
//! host for the next frame.

use rand::Rng;

use crate::config::FieldConfig;
use crate::error::LifecycleError;
use crate::platform::{FrameHandle, FrameHost};
use crate::renderer::{Canvas2d, FrameStats, render_frame};
use crate::sim::{AnimationClock, PointField};
use crate::surface::{SurfaceState, Viewport};

/// Loop state of a backdrop instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Constructed, surface and field not initialized
    Idle,
    /// Frames are being scheduled
    Running,
    /// Torn down; terminal
    Stopped,
}

pub struct Backdrop<C: Canvas2d> {
    canvas: C,
    config: FieldConfig,
    surface: SurfaceState,
    field: PointField,
    clock: AnimationClock,
    phase: LoopPhase,
    pending_frame: Option<FrameHandle>,
    last_stats: FrameStats,
}

impl<C: Canvas2d> Backdrop<C> {
    pub fn new(canvas: C, config: FieldConfig) -> Self {
        Self {
            canvas,
            config: config.sanitized(),
            surface: SurfaceState::from_viewport(Viewport::new(0.0, 0.0, 1.0)),
            field: PointField::default(),
            clock: AnimationClock::new(),
            phase: LoopPhase::Idle,
            pending_frame: None,
            last_stats: FrameStats::default(),
        }
    }

    /// Size the surface, seed the field, listen for resizes and schedule the
    /// first frame. Nothing is drawn until that frame fires.
    pub fn mount<H, R>(&mut self, host: &mut H, rng: &mut R) -> Result<(), LifecycleError>
    where
        H: FrameHost + ?Sized,
        R: Rng + ?Sized,
    {
        match self.phase {
            LoopPhase::Idle => {}
            LoopPhase::Running => return Err(LifecycleError::AlreadyRunning),
            LoopPhase::Stopped => return Err(LifecycleError::Stopped),
        }

        self.surface = SurfaceState::initialize(host.viewport(), &mut self.canvas);
        self.field = PointField::seed(self.surface.logical_size(), &self.config, rng);
        host.listen_resize();
        self.phase = LoopPhase::Running;
        self.pending_frame = host.request_frame();

        log::info!(
            "Backdrop mounted: {} points on {}x{} @{}x",
            self.field.len(),
            self.surface.width(),
            self.surface.height(),
            self.surface.device_pixel_ratio()
        );
        Ok(())
    }

    /// Run one frame: tick, advance, draw, reschedule.
    ///
    /// Returns `None` (and does nothing) unless the backdrop is running.
    pub fn on_frame<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> Option<FrameStats> {
        if self.phase != LoopPhase::Running {
            return None;
        }
        self.pending_frame = None;

        self.clock.tick();
        self.field.advance(self.surface.logical_size());
        self.last_stats = render_frame(
            &mut self.canvas,
            &self.field,
            &self.surface,
            &self.clock,
            &self.config,
        );

        self.pending_frame = host.request_frame();
        if self.pending_frame.is_none() {
            log::warn!("Host refused to schedule a frame; animation halted");
        }
        Some(self.last_stats)
    }

    /// Re-read the viewport and resize the surface. Points are not reseeded.
    pub fn on_resize<H: FrameHost + ?Sized>(&mut self, host: &H) {
        if self.phase != LoopPhase::Running {
            return;
        }
        if self.surface.on_resize(host.viewport(), &mut self.canvas) {
            log::debug!(
                "Backdrop resized to {}x{} @{}x",
                self.surface.width(),
                self.surface.height(),
                self.surface.device_pixel_ratio()
            );
        }
    }

    /// Cancel the pending frame, then stop listening for resizes.
    ///
    /// Safe to call more than once; an idle backdrop goes straight to Stopped.
    pub fn unmount<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        match self.phase {
            LoopPhase::Stopped => return,
            LoopPhase::Idle => {
                self.phase = LoopPhase::Stopped;
                return;
            }
            LoopPhase::Running => {}
        }

        if let Some(handle) = self.pending_frame.take() {
            host.cancel_frame(handle);
        }
        host.unlisten_resize();
        self.phase = LoopPhase::Stopped;
        log::info!("Backdrop unmounted after {} frames", self.clock.ticks());
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }
}
