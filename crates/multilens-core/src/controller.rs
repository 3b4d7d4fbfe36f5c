//! Gesture-to-capture-request wiring.
//!
//! The device session lives outside this crate. [`CaptureRequestSink`] is
//! the interface the core needs from it, and [`CameraController`] turns
//! lens-switch, pinch, tap and shutter gestures into calls on that sink
//! using the geometry in [`crate::geometry`].

use thiserror::Error;

use crate::config::CaptureConfig;
use crate::geometry::{
    jpeg_orientation, map_touch_to_sensor, GeometryError, MeteringRegion, Rotation, ScreenPoint,
    ScreenSize, SensorRect, SensorSize, ZoomLimits, ZoomState,
};
use crate::lens::{LensDescriptor, LensRole, RoleMap};

/// Capture pipeline operations driven by the controller.
///
/// Implemented by the orchestrator that owns the device and session.
pub trait CaptureRequestSink {
    type Error: std::error::Error + 'static;

    /// Route preview and still outputs to the physical lens `lens_id`.
    fn select_lens(&mut self, lens_id: &str) -> Result<(), Self::Error>;

    /// Update the repeating preview request's digital-zoom crop region.
    fn set_crop_region(&mut self, crop: SensorRect) -> Result<(), Self::Error>;

    /// Start an autofocus scan on `region`.
    fn trigger_focus(&mut self, region: MeteringRegion) -> Result<(), Self::Error>;

    /// Capture a still of `size` pixels with the given clockwise JPEG
    /// orientation in degrees.
    fn capture_still(&mut self, size: ScreenSize, orientation: u32) -> Result<(), Self::Error>;
}

/// Errors from [`CameraController`] operations.
#[derive(Debug, Error)]
pub enum ControlError<E> {
    /// The requested role has no lens on this device.
    #[error("No lens available for role {0:?}")]
    RoleUnavailable(LensRole),

    /// A gesture arrived before any lens was selected.
    #[error("No lens is active")]
    NoActiveLens,

    /// Lens geometry reported by the device is unusable.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The capture pipeline rejected the request.
    #[error("Capture pipeline error: {0}")]
    Sink(#[source] E),
}

/// Geometry the device reports for one physical lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensGeometry {
    /// Active pixel array size.
    pub sensor: SensorSize,
    /// Fixed mount orientation.
    pub orientation: Rotation,
    /// Maximum digital zoom.
    pub max_zoom: f32,
}

#[derive(Debug, Clone)]
struct ActiveLens {
    id: String,
    role: LensRole,
    geometry: LensGeometry,
}

/// Drives a [`CaptureRequestSink`] from user gestures.
pub struct CameraController<S, C = ()> {
    sink: S,
    roles: RoleMap<C>,
    config: CaptureConfig,
    zoom: ZoomState,
    active: Option<ActiveLens>,
}

impl<S: CaptureRequestSink, C> CameraController<S, C> {
    pub fn new(sink: S, roles: RoleMap<C>, config: CaptureConfig) -> Self {
        Self {
            sink,
            roles,
            config,
            zoom: ZoomState::default(),
            active: None,
        }
    }

    pub fn roles(&self) -> &RoleMap<C> {
        &self.roles
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Id and role of the selected lens.
    pub fn active_lens(&self) -> Option<(&str, LensRole)> {
        self.active.as_ref().map(|a| (a.id.as_str(), a.role))
    }

    /// Switch to the lens bound to `role`.
    ///
    /// Adopts the lens geometry, re-clamps the zoom level to its limits and
    /// pushes the matching crop region. Once the sink has selected the lens,
    /// the controller tracks it even if the crop update then fails.
    pub fn switch_to(
        &mut self,
        role: LensRole,
        geometry: LensGeometry,
    ) -> Result<&LensDescriptor<C>, ControlError<S::Error>> {
        let lens = self
            .roles
            .get(role)
            .ok_or(ControlError::RoleUnavailable(role))?;

        let threshold = self.config.min_zoom_threshold;
        // Lenses without digital zoom report a max below the threshold
        let max_zoom = if geometry.max_zoom < threshold {
            threshold
        } else {
            geometry.max_zoom
        };
        let limits = ZoomLimits::new(threshold, max_zoom)?;

        self.sink.select_lens(&lens.id).map_err(ControlError::Sink)?;
        log::info!("switched to {:?} lens {}", role, lens.id);
        self.zoom.set_limits(limits);
        self.active = Some(ActiveLens {
            id: lens.id.clone(),
            role,
            geometry,
        });

        self.sink
            .set_crop_region(self.zoom.crop_rect(geometry.sensor))
            .map_err(ControlError::Sink)?;
        Ok(lens)
    }

    /// Apply a pinch gesture.
    ///
    /// Returns `true` when the zoom changed and a new crop region was sent,
    /// `false` when the request was a no-op.
    pub fn pinch(&mut self, scale_factor: f32) -> Result<bool, ControlError<S::Error>> {
        let geometry = self.geometry()?;

        let Some(level) = self.zoom.apply_pinch(scale_factor) else {
            log::debug!(
                "pinch x{} ignored at zoom {}",
                scale_factor,
                self.zoom.level()
            );
            return Ok(false);
        };

        let crop = self.zoom.crop_rect(geometry.sensor);
        log::debug!("zoom {} -> crop {:?}", level, crop);
        self.sink.set_crop_region(crop).map_err(ControlError::Sink)?;
        Ok(true)
    }

    /// Focus on a tap in the configured preview surface.
    pub fn tap(
        &mut self,
        point: ScreenPoint,
        display_rotation: Rotation,
    ) -> Result<MeteringRegion, ControlError<S::Error>> {
        let geometry = self.geometry()?;

        let sensor_point = map_touch_to_sensor(
            point,
            self.config.preview,
            self.zoom.effective_level(),
            geometry.orientation,
            display_rotation,
            geometry.sensor,
        );
        let metering = self.config.metering;
        let region = MeteringRegion::centered_on(
            sensor_point,
            metering.width,
            metering.height,
            metering.weight,
            geometry.sensor,
        );

        log::debug!("tap {:?} -> sensor {:?}", point, sensor_point);
        self.sink.trigger_focus(region).map_err(ControlError::Sink)?;
        Ok(region)
    }

    /// Capture a still at the configured capture size, returning the JPEG
    /// orientation that was requested.
    pub fn capture(&mut self, display_rotation: Rotation) -> Result<u32, ControlError<S::Error>> {
        let geometry = self.geometry()?;
        let degrees = jpeg_orientation(geometry.orientation.degrees(), display_rotation);
        self.sink
            .capture_still(self.config.capture, degrees)
            .map_err(ControlError::Sink)?;
        Ok(degrees)
    }

    fn geometry(&self) -> Result<LensGeometry, ControlError<S::Error>> {
        self.active
            .as_ref()
            .map(|a| a.geometry)
            .ok_or(ControlError::NoActiveLens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SensorPoint;
    use crate::lens::{classify, Facing, Measurement};

    #[derive(Debug, Error)]
    #[error("session closed")]
    struct SessionClosed;

    #[derive(Debug, Clone, PartialEq)]
    enum Request {
        Select(String),
        Crop(SensorRect),
        Focus(MeteringRegion),
        Still(ScreenSize, u32),
    }

    #[derive(Default)]
    struct RecordingSink {
        requests: Vec<Request>,
        closed: bool,
        reject_crop: bool,
    }

    impl RecordingSink {
        fn push(&mut self, request: Request) -> Result<(), SessionClosed> {
            let rejected = self.reject_crop && matches!(request, Request::Crop(_));
            if self.closed || rejected {
                return Err(SessionClosed);
            }
            self.requests.push(request);
            Ok(())
        }
    }

    impl CaptureRequestSink for RecordingSink {
        type Error = SessionClosed;

        fn select_lens(&mut self, lens_id: &str) -> Result<(), SessionClosed> {
            self.push(Request::Select(lens_id.to_string()))
        }

        fn set_crop_region(&mut self, crop: SensorRect) -> Result<(), SessionClosed> {
            self.push(Request::Crop(crop))
        }

        fn trigger_focus(&mut self, region: MeteringRegion) -> Result<(), SessionClosed> {
            self.push(Request::Focus(region))
        }

        fn capture_still(
            &mut self,
            size: ScreenSize,
            orientation: u32,
        ) -> Result<(), SessionClosed> {
            self.push(Request::Still(size, orientation))
        }
    }

    fn back(id: &str, focal: f32, area: f32) -> LensDescriptor {
        LensDescriptor::new(
            id,
            Facing::Back,
            Measurement::Known(focal),
            Measurement::Known(area),
            (),
        )
    }

    fn sensor() -> SensorSize {
        SensorSize::new(4032, 3024).unwrap()
    }

    fn geometry(max_zoom: f32) -> LensGeometry {
        LensGeometry {
            sensor: sensor(),
            orientation: Rotation::Deg90,
            max_zoom,
        }
    }

    fn controller() -> CameraController<RecordingSink> {
        let roles = classify(&[back("0", 5.4, 40.0), back("3", 9.0, 10.0)]);
        CameraController::new(RecordingSink::default(), roles, CaptureConfig::default())
    }

    #[test]
    fn test_switch_selects_lens_and_resets_crop() {
        let mut ctl = controller();
        let lens = ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap();
        assert_eq!(lens.id, "0");
        assert_eq!(ctl.active_lens(), Some(("0", LensRole::Wide)));
        assert_eq!(
            ctl.sink().requests,
            vec![
                Request::Select("0".to_string()),
                Request::Crop(sensor().full_rect())
            ]
        );
    }

    #[test]
    fn test_switch_to_unbound_role() {
        let mut ctl = controller();
        let err = ctl.switch_to(LensRole::SuperWide, geometry(8.0)).unwrap_err();
        assert!(matches!(err, ControlError::RoleUnavailable(LensRole::SuperWide)));
        assert!(ctl.sink().requests.is_empty());
    }

    #[test]
    fn test_switch_rejects_bad_zoom() {
        let mut ctl = controller();
        let err = ctl.switch_to(LensRole::Wide, geometry(f32::NAN)).unwrap_err();
        assert!(matches!(err, ControlError::Geometry(_)));
    }

    #[test]
    fn test_gestures_require_active_lens() {
        let mut ctl = controller();
        assert!(matches!(ctl.pinch(2.0), Err(ControlError::NoActiveLens)));
        assert!(matches!(
            ctl.capture(Rotation::Deg0),
            Err(ControlError::NoActiveLens)
        ));
    }

    #[test]
    fn test_pinch_sends_crop_only_on_change() {
        let mut ctl = controller();
        ctl.switch_to(LensRole::Wide, geometry(2.0)).unwrap();

        assert!(ctl.pinch(2.0).unwrap());
        // Already at max zoom
        assert!(!ctl.pinch(1.5).unwrap());

        let crops: Vec<&Request> = ctl
            .sink()
            .requests
            .iter()
            .filter(|r| matches!(r, Request::Crop(_)))
            .collect();
        assert_eq!(crops.len(), 2);
        assert_eq!(
            crops[1],
            &Request::Crop(SensorRect {
                left: 1008,
                top: 756,
                right: 3024,
                bottom: 2268,
            })
        );
    }

    #[test]
    fn test_tap_builds_metering_region() {
        let mut ctl = controller();
        ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap();

        let region = ctl.tap(ScreenPoint::new(720.0, 540.0), Rotation::Deg0).unwrap();

        assert_eq!((region.x, region.y), (2016 - 75, 1512 - 75));
        assert_eq!((region.width, region.height, region.weight), (150, 150, 999));
        assert_eq!(ctl.sink().requests.last(), Some(&Request::Focus(region)));
    }

    #[test]
    fn test_tap_uses_zoomed_view() {
        let mut ctl = controller();
        ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap();
        ctl.pinch(2.0).unwrap();

        // Mount 90, display 0: preview origin maps to sensor (0, h) before zoom
        let region = ctl.tap(ScreenPoint::new(0.0, 0.0), Rotation::Deg0).unwrap();
        let center = SensorPoint {
            x: region.x + 75,
            y: region.y + 75,
        };
        assert_eq!(center, SensorPoint { x: 1008, y: 2268 });
    }

    #[test]
    fn test_capture_orientation() {
        let mut ctl = controller();
        ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap();

        assert_eq!(ctl.capture(Rotation::Deg0).unwrap(), 90);
        assert_eq!(ctl.capture(Rotation::Deg270).unwrap(), 0);
        assert_eq!(
            ctl.sink().requests.last(),
            Some(&Request::Still(ScreenSize::new(4032, 3024), 0))
        );
    }

    #[test]
    fn test_tap_below_unity_zoom_maps_unzoomed() {
        let mut ctl = controller();
        ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap();
        assert!(ctl.pinch(0.75).unwrap());

        // Mount 90: ratio (0.1, 0.1) -> (0.1, 0.9) on the full sensor
        let region = ctl.tap(ScreenPoint::new(144.0, 108.0), Rotation::Deg0).unwrap();
        let center = SensorPoint {
            x: region.x + 75,
            y: region.y + 75,
        };
        assert_eq!(center, SensorPoint { x: 403, y: 2721 });
    }

    #[test]
    fn test_tap_uses_configured_preview_size() {
        let config = CaptureConfig {
            preview: ScreenSize::new(720, 540),
            ..CaptureConfig::default()
        };
        let roles = classify(&[back("0", 5.4, 40.0)]);
        let mut ctl = CameraController::new(RecordingSink::default(), roles, config);
        ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap();

        // Center of the smaller preview is still the sensor center
        let region = ctl.tap(ScreenPoint::new(360.0, 270.0), Rotation::Deg0).unwrap();
        assert_eq!((region.x, region.y), (2016 - 75, 1512 - 75));
    }

    #[test]
    fn test_failed_crop_after_select_tracks_new_lens() {
        let mut ctl = controller();
        ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap();
        ctl.pinch(4.0).unwrap();

        ctl.sink.reject_crop = true;
        let err = ctl.switch_to(LensRole::Telephoto, geometry(2.0)).unwrap_err();
        assert!(matches!(err, ControlError::Sink(SessionClosed)));

        // The sink switched lens, so zoom limits and active lens follow it
        assert_eq!(ctl.active_lens(), Some(("3", LensRole::Telephoto)));
        assert_eq!(ctl.zoom().limits().max(), 2.0);
        assert_eq!(ctl.zoom().level(), 2.0);

        ctl.sink.reject_crop = false;
        assert!(!ctl.pinch(1.5).unwrap());
        assert!(ctl.pinch(0.5).unwrap());
        assert_eq!(
            ctl.sink().requests.last(),
            Some(&Request::Crop(sensor().full_rect()))
        );
    }

    #[test]
    fn test_sink_errors_are_wrapped() {
        let mut ctl = controller();
        ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap();

        let mut sink = ctl.into_sink();
        sink.closed = true;
        let roles = classify(&[back("0", 5.4, 40.0)]);
        let mut ctl = CameraController::new(sink, roles, CaptureConfig::default());

        let err = ctl.switch_to(LensRole::Wide, geometry(8.0)).unwrap_err();
        assert_eq!(err.to_string(), "Capture pipeline error: session closed");
    }
}
