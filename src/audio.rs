//! Audio and haptics using Web APIs
//!
//! The win fanfare is generated with oscillators - no external files needed!

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::error::EffectError;
use crate::settings::Settings;
use crate::ui::EffectSink;

fn playback_err(e: JsValue) -> EffectError {
    EffectError::Playback(format!("{:?}", e))
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx, volume: 0.8 }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Result<(OscillatorNode, GainNode), EffectError> {
        let osc = ctx.create_oscillator().map_err(playback_err)?;
        let gain = ctx.create_gain().map_err(playback_err)?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).map_err(playback_err)?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(playback_err)?;

        Ok((osc, gain))
    }

    /// Win - rising triumphant fanfare
    pub fn play_win(&self) -> Result<(), EffectError> {
        let ctx = self
            .ctx
            .as_ref()
            .ok_or(EffectError::Unsupported("AudioContext"))?;

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let vol = self.volume;
        for (i, freq) in [400.0, 500.0, 600.0, 800.0, 1000.0].iter().enumerate() {
            let delay = i as f64 * 0.12;
            let (osc, gain) = self.create_osc(ctx, *freq, OscillatorType::Triangle)?;
            let t = ctx.current_time() + delay;
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                .ok();
            osc.start_with_when(t).map_err(playback_err)?;
            osc.stop_with_when(t + 0.5).map_err(playback_err)?;
        }
        Ok(())
    }
}

/// Browser effect sink: Web Audio fanfare plus `navigator.vibrate`
pub struct WebEffects {
    audio: AudioManager,
    settings: Settings,
}

impl Default for WebEffects {
    fn default() -> Self {
        Self::new()
    }
}

impl WebEffects {
    pub fn new() -> Self {
        Self {
            audio: AudioManager::new(),
            settings: Settings::default(),
        }
    }
}

/// True if the browser exposes the Vibration API
pub fn vibration_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("vibrate")).unwrap_or(false))
        .unwrap_or(false)
}

impl EffectSink for WebEffects {
    fn apply_settings(&mut self, settings: &Settings) {
        self.settings = *settings;
    }

    fn play_win_sound(&mut self) -> Result<(), EffectError> {
        if !self.settings.music {
            return Ok(());
        }
        self.audio.play_win()
    }

    fn vibrate(&mut self, duration_ms: u32) -> Result<(), EffectError> {
        if !self.settings.vibration {
            return Ok(());
        }
        if !vibration_supported() {
            return Err(EffectError::Unsupported("Vibration API"));
        }
        let window = web_sys::window().ok_or(EffectError::Unsupported("window"))?;
        if window.navigator().vibrate_with_duration(duration_ms) {
            Ok(())
        } else {
            Err(EffectError::Playback("vibration request rejected".into()))
        }
    }
}
