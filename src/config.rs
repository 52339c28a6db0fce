use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use json::{JsonValue, object};

/// Fraction of width/height removed from each side when a job does not
/// specify its own.
pub const DEFAULT_CROP_FRACTION: f64 = 0.25;

/// One favicon source to process: where to read it, where the primary
/// output goes (also the stem for the size-suffixed files), and how much
/// of each edge to crop away.
#[derive(Debug, Clone)]
pub struct CropJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub crop_fraction: f64,
}

/// The run manifest: every source the driver should process, in order.
#[derive(Debug)]
pub struct BatchConfig {
    pub jobs: Vec<CropJob>,
}

impl BatchConfig {
    fn to_config(json_string: String) -> Result<BatchConfig, Box<dyn std::error::Error>> {
        let json = json::parse(json_string.as_str())?;

        let jobs_json = &json["jobs"];
        if !jobs_json.is_array() || jobs_json.is_empty() {
            return ConfigError::get("jobs should be an array of 1 or more job objects");
        }

        let mut index = 0;
        let mut jobs: Vec<CropJob> = Vec::new();
        while index < jobs_json.len() {
            let input = match jobs_json[index]["input"].as_str() {
                Some(val) => PathBuf::from(val),
                None => return ConfigError::get("Couldn't parse jobs.*.input"),
            };
            let output = match jobs_json[index]["output"].as_str() {
                Some(val) => PathBuf::from(val),
                None => return ConfigError::get("Couldn't parse jobs.*.output"),
            };
            let crop_fraction = match jobs_json[index]["crop_fraction"].as_f64() {
                Some(val) => val,
                None => DEFAULT_CROP_FRACTION,
            };

            jobs.push(CropJob {
                input,
                output,
                crop_fraction,
            });

            index += 1;
        }

        Ok(BatchConfig { jobs })
    }

    fn to_json(config: &BatchConfig) -> String {
        let mut data = json::JsonValue::new_object();

        data["jobs"] = config.jobs.clone().into();

        data.to_string()
    }

    pub fn read_config(path: &Path) -> Result<BatchConfig, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut buff: Vec<u8> = Vec::new();
        let _ = file.read_to_end(&mut buff)?;

        let json_string = String::from_utf8(buff)?;

        BatchConfig::to_config(json_string)
    }

    pub fn write_config(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let string = BatchConfig::to_json(self);
        let mut file = File::create(path)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }
}

impl From<CropJob> for JsonValue {
    fn from(job: CropJob) -> Self {
        object! {
            input: job.input.to_string_lossy().into_owned(),
            output: job.output.to_string_lossy().into_owned(),
            crop_fraction: job.crop_fraction,
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    msg: String,
}

impl ConfigError {
    fn get(msg: &str) -> Result<BatchConfig, Box<dyn std::error::Error>> {
        Err(Box::new(ConfigError {
            msg: String::from(msg),
        }))
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("ConfigParseError {}", self.msg))
    }
}
impl Error for ConfigError {}
