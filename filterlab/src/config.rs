use anyhow::{Context, Result, bail};
use image_effect::{Intensity, Operation};
use log::{debug, warn};
use once_cell::sync::Lazy;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(skip)]
    pub app_name: String,

    #[serde(default)]
    pub preference: Preference,

    #[serde(default)]
    pub processing: Processing,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Preference {
    #[derivative(Default(value = "1000"))]
    pub win_width: u32,

    #[derivative(Default(value = "700"))]
    pub win_height: u32,

    #[derivative(Default(value = "1000"))]
    pub preview_width: u32,

    #[derivative(Default(value = "500"))]
    pub preview_height: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Processing {
    #[derivative(Default(value = "1.0"))]
    pub default_intensity: f32,

    #[derivative(Default(value = "\"Gaussian Blur\".to_string()"))]
    pub default_operation: String,
}

impl Processing {
    /// Intensity preselected in the GUI, clamped into the valid range.
    pub fn intensity(&self) -> Intensity {
        Intensity::saturating(self.default_intensity)
    }

    /// Operation preselected in the GUI. Unknown names fall back to Gaussian Blur.
    pub fn operation(&self) -> Operation {
        Operation::from_name(&self.default_operation).unwrap_or_else(|| {
            warn!(
                "unknown default operation `{}`, using {}",
                self.default_operation,
                Operation::GaussianBlur
            );
            Operation::GaussianBlur
        })
    }
}

impl Config {
    pub fn init(&mut self) -> Result<()> {
        self.app_name = env!("CARGO_PKG_NAME").to_string();

        let app_dirs = AppDirs::new(Some(&self.app_name), true)
            .with_context(|| "no config directory on this platform")?;

        fs::create_dir_all(&app_dirs.config_dir)?;
        self.config_path = app_dirs.config_dir.join(format!("{}.toml", self.app_name));

        self.load().with_context(|| "load config file failed")?;
        debug!("{:?}", self);
        Ok(())
    }

    /// Reads `config_path`, or writes the defaults there when the file is
    /// missing or unreadable. A corrupt file is kept as `<name>.bak`.
    pub(crate) fn load(&mut self) -> Result<()> {
        let text = match fs::read_to_string(&self.config_path) {
            Ok(text) => text,
            Err(_) => return self.reset(),
        };

        match toml::from_str::<Config>(&text) {
            Ok(mut c) => {
                c.config_path = self.config_path.clone();
                c.is_first_run = self.is_first_run;
                c.app_name = self.app_name.clone();
                *self = c;
                Ok(())
            }
            Err(e) => {
                warn!("parse {} failed: {e}", self.config_path.display());

                let mut bak_file = self.config_path.clone().into_os_string();
                bak_file.push(".bak");
                _ = fs::copy(&self.config_path, &bak_file);

                self.reset()
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.is_first_run = true;
        self.preference = Preference::default();
        self.processing = Processing::default();
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(fs::write(&self.config_path, text)
                .with_context(|| "save config failed".to_string())?),
            Err(e) => bail!(format!("convert config to toml format failed. {e:?}")),
        }
    }
}

fn lock() -> MutexGuard<'static, Config> {
    CONFIG.lock().unwrap_or_else(|e| e.into_inner())
}

/// Loads the configuration file once at startup. Failures leave the
/// defaults in place.
pub fn init() {
    if let Err(e) = lock().init() {
        warn!("{e:?}, using default config");
    }
}

pub fn all() -> Config {
    lock().clone()
}
