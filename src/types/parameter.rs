//! Defines the `Parameter` catalog of SMHI meteorological observation parameters and the
//! archive CSV layout each of them is exported with.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The column layout SMHI uses for a parameter's `corrected-archive` CSV export.
///
/// Every [`Parameter`] maps to exactly one layout through [`Parameter::archive_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    /// Instantaneous measurements. The timestamp is split over a `Datum` column and a
    /// `Tid (UTC)` column.
    Instantaneous,
    /// Accumulations or extremes over a day. The timestamp is the `Representativt dygn`
    /// column. Latest-period JSON for these parameters carries the day under `ref`
    /// instead of `date`.
    DailyAccumulation,
    /// No archive layout is known for this parameter yet.
    Unsupported,
}

/// A meteorological observation parameter offered by the SMHI Open Data API.
///
/// The discriminant is the numeric parameter id used in API paths, e.g.
/// `parameter/1/station/98210/...` for [`Parameter::TemperaturePast1h`]. See the
/// [SMHI documentation](https://opendata.smhi.se/apidocs/metobs/parameter.html) for the
/// official descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum Parameter {
    /// Air temperature, instantaneous value, once per hour.
    TemperaturePast1h = 1,
    /// Air temperature, mean over one day, once per day at 00.
    TemperaturePast24h = 2,
    /// Wind direction, 10 minute mean, once per hour.
    WindDirection = 3,
    /// Wind speed, 10 minute mean, once per hour.
    WindSpeed = 4,
    /// Precipitation, sum over one day, once per day at 06.
    PrecipPast24hAt06 = 5,
    /// Relative humidity, instantaneous value, once per hour.
    Humidity = 6,
    /// Precipitation, sum over one hour, once per hour.
    PrecipPast1h = 7,
    /// Snow depth, instantaneous value, once per day at 06.
    SnowDepth = 8,
    /// Air pressure reduced to sea level, instantaneous value, once per hour.
    AirPressure = 9,
    /// Sunshine duration, sum over one hour, once per hour.
    SunshineTime = 10,
    /// Global irradiance, mean over one hour, once per hour.
    Irradiance = 11,
    /// Visibility, instantaneous value, once per hour.
    Visibility = 12,
    /// Present weather, instantaneous value.
    CurrentWeather = 13,
    /// Precipitation, sum over 15 minutes, four times per hour.
    PrecipPast15m = 14,
    /// Precipitation intensity, max over 15 minutes, four times per hour.
    PrecipIntensityMaxPast15m = 15,
    /// Total cloud cover, instantaneous value, once per hour.
    CloudCover = 16,
    /// Precipitation, twice per day at 06 and 18.
    PrecipTwicePerDay = 17,
    /// Precipitation, sum over one day, once per day at 18.
    PrecipPast24hAt18 = 18,
    /// Air temperature, minimum over one day.
    TemperatureMinPast24h = 19,
    /// Air temperature, maximum over one day.
    TemperatureMaxPast24h = 20,
    /// Wind gust, max, once per hour.
    WindGust = 21,
    /// Air temperature, mean over one month.
    TemperatureMeanPastMonth = 22,
    /// Precipitation, sum over one month.
    PrecipPastMonth = 23,
    /// Long-wave irradiance, mean over one hour, once per hour.
    LongWaveIrradiance = 24,
    /// Max of the 10 minute mean wind speed over three hours, once per hour.
    WindSpeedMaxMeanPast3h = 25,
    /// Air temperature, minimum, twice per day at 06 and 18.
    TemperatureMinTwicePerDay = 26,
    /// Air temperature, maximum, twice per day at 06 and 18.
    TemperatureMaxTwicePerDay = 27,
    /// Cloud base of the lowest cloud layer, instantaneous value.
    CloudBaseLowestLayer = 28,
    /// Cloud amount of the lowest cloud layer, instantaneous value.
    CloudAmountLowestLayer = 29,
    /// Cloud base of the second cloud layer, instantaneous value.
    CloudBaseSecondLayer = 30,
    /// Cloud amount of the second cloud layer, instantaneous value.
    CloudAmountSecondLayer = 31,
    /// Cloud base of the third cloud layer, instantaneous value.
    CloudBaseThirdLayer = 32,
    /// Cloud amount of the third cloud layer, instantaneous value.
    CloudAmountThirdLayer = 33,
    /// Cloud base of the fourth cloud layer, instantaneous value.
    CloudBaseFourthLayer = 34,
    /// Cloud amount of the fourth cloud layer, instantaneous value.
    CloudAmountFourthLayer = 35,
    /// Lowest cloud base, instantaneous value.
    CloudBaseLowest = 36,
    /// Lowest cloud base, min over 15 minutes.
    CloudBaseLowestMinPast15m = 37,
    /// Precipitation intensity, max of mean over 15 minutes, four times per hour.
    PrecipIntensityMaxMeanPast15m = 38,
    /// Dew point temperature, instantaneous value, once per hour.
    DewPointTemperature = 39,
    /// State of the ground, instantaneous value, once per day at 06.
    GroundState = 40,
}

/// Error returned when converting an unknown numeric id into a [`Parameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown SMHI parameter id {0}")]
pub struct UnknownParameterId(pub u32);

impl Parameter {
    /// Every parameter in the catalog, ordered by id.
    pub const ALL: [Parameter; 40] = [
        Parameter::TemperaturePast1h,
        Parameter::TemperaturePast24h,
        Parameter::WindDirection,
        Parameter::WindSpeed,
        Parameter::PrecipPast24hAt06,
        Parameter::Humidity,
        Parameter::PrecipPast1h,
        Parameter::SnowDepth,
        Parameter::AirPressure,
        Parameter::SunshineTime,
        Parameter::Irradiance,
        Parameter::Visibility,
        Parameter::CurrentWeather,
        Parameter::PrecipPast15m,
        Parameter::PrecipIntensityMaxPast15m,
        Parameter::CloudCover,
        Parameter::PrecipTwicePerDay,
        Parameter::PrecipPast24hAt18,
        Parameter::TemperatureMinPast24h,
        Parameter::TemperatureMaxPast24h,
        Parameter::WindGust,
        Parameter::TemperatureMeanPastMonth,
        Parameter::PrecipPastMonth,
        Parameter::LongWaveIrradiance,
        Parameter::WindSpeedMaxMeanPast3h,
        Parameter::TemperatureMinTwicePerDay,
        Parameter::TemperatureMaxTwicePerDay,
        Parameter::CloudBaseLowestLayer,
        Parameter::CloudAmountLowestLayer,
        Parameter::CloudBaseSecondLayer,
        Parameter::CloudAmountSecondLayer,
        Parameter::CloudBaseThirdLayer,
        Parameter::CloudAmountThirdLayer,
        Parameter::CloudBaseFourthLayer,
        Parameter::CloudAmountFourthLayer,
        Parameter::CloudBaseLowest,
        Parameter::CloudBaseLowestMinPast15m,
        Parameter::PrecipIntensityMaxMeanPast15m,
        Parameter::DewPointTemperature,
        Parameter::GroundState,
    ];

    /// The numeric id SMHI uses for this parameter.
    ///
    /// ```
    /// use smhi::Parameter;
    ///
    /// assert_eq!(Parameter::Humidity.id(), 6);
    /// ```
    pub fn id(self) -> u32 {
        self as u32
    }

    /// The symbolic name, used as the value column name in normalized tables.
    pub fn name(self) -> &'static str {
        match self {
            Parameter::TemperaturePast1h => "TemperaturePast1h",
            Parameter::TemperaturePast24h => "TemperaturePast24h",
            Parameter::WindDirection => "WindDirection",
            Parameter::WindSpeed => "WindSpeed",
            Parameter::PrecipPast24hAt06 => "PrecipPast24hAt06",
            Parameter::Humidity => "Humidity",
            Parameter::PrecipPast1h => "PrecipPast1h",
            Parameter::SnowDepth => "SnowDepth",
            Parameter::AirPressure => "AirPressure",
            Parameter::SunshineTime => "SunshineTime",
            Parameter::Irradiance => "Irradiance",
            Parameter::Visibility => "Visibility",
            Parameter::CurrentWeather => "CurrentWeather",
            Parameter::PrecipPast15m => "PrecipPast15m",
            Parameter::PrecipIntensityMaxPast15m => "PrecipIntensityMaxPast15m",
            Parameter::CloudCover => "CloudCover",
            Parameter::PrecipTwicePerDay => "PrecipTwicePerDay",
            Parameter::PrecipPast24hAt18 => "PrecipPast24hAt18",
            Parameter::TemperatureMinPast24h => "TemperatureMinPast24h",
            Parameter::TemperatureMaxPast24h => "TemperatureMaxPast24h",
            Parameter::WindGust => "WindGust",
            Parameter::TemperatureMeanPastMonth => "TemperatureMeanPastMonth",
            Parameter::PrecipPastMonth => "PrecipPastMonth",
            Parameter::LongWaveIrradiance => "LongWaveIrradiance",
            Parameter::WindSpeedMaxMeanPast3h => "WindSpeedMaxMeanPast3h",
            Parameter::TemperatureMinTwicePerDay => "TemperatureMinTwicePerDay",
            Parameter::TemperatureMaxTwicePerDay => "TemperatureMaxTwicePerDay",
            Parameter::CloudBaseLowestLayer => "CloudBaseLowestLayer",
            Parameter::CloudAmountLowestLayer => "CloudAmountLowestLayer",
            Parameter::CloudBaseSecondLayer => "CloudBaseSecondLayer",
            Parameter::CloudAmountSecondLayer => "CloudAmountSecondLayer",
            Parameter::CloudBaseThirdLayer => "CloudBaseThirdLayer",
            Parameter::CloudAmountThirdLayer => "CloudAmountThirdLayer",
            Parameter::CloudBaseFourthLayer => "CloudBaseFourthLayer",
            Parameter::CloudAmountFourthLayer => "CloudAmountFourthLayer",
            Parameter::CloudBaseLowest => "CloudBaseLowest",
            Parameter::CloudBaseLowestMinPast15m => "CloudBaseLowestMinPast15m",
            Parameter::PrecipIntensityMaxMeanPast15m => "PrecipIntensityMaxMeanPast15m",
            Parameter::DewPointTemperature => "DewPointTemperature",
            Parameter::GroundState => "GroundState",
        }
    }

    /// The archive CSV layout for this parameter.
    ///
    /// Every variant must be listed here; there is no fallback layout.
    pub fn archive_format(self) -> ArchiveFormat {
        match self {
            Parameter::TemperaturePast1h
            | Parameter::WindDirection
            | Parameter::WindSpeed
            | Parameter::Humidity
            | Parameter::PrecipPast1h
            | Parameter::SnowDepth
            | Parameter::AirPressure
            | Parameter::SunshineTime
            | Parameter::Irradiance
            | Parameter::Visibility
            | Parameter::CurrentWeather
            | Parameter::CloudCover
            | Parameter::WindGust
            | Parameter::LongWaveIrradiance
            | Parameter::WindSpeedMaxMeanPast3h
            | Parameter::CloudBaseLowestLayer
            | Parameter::CloudAmountLowestLayer
            | Parameter::CloudBaseSecondLayer
            | Parameter::CloudAmountSecondLayer
            | Parameter::CloudBaseThirdLayer
            | Parameter::CloudAmountThirdLayer
            | Parameter::CloudBaseFourthLayer
            | Parameter::CloudAmountFourthLayer
            | Parameter::CloudBaseLowest
            | Parameter::CloudBaseLowestMinPast15m
            | Parameter::DewPointTemperature
            | Parameter::GroundState => ArchiveFormat::Instantaneous,

            Parameter::TemperaturePast24h
            | Parameter::PrecipPast24hAt06
            | Parameter::PrecipPast24hAt18
            | Parameter::TemperatureMinPast24h
            | Parameter::TemperatureMaxPast24h => ArchiveFormat::DailyAccumulation,

            Parameter::PrecipPast15m
            | Parameter::PrecipIntensityMaxPast15m
            | Parameter::PrecipTwicePerDay
            | Parameter::TemperatureMeanPastMonth
            | Parameter::PrecipPastMonth
            | Parameter::TemperatureMinTwicePerDay
            | Parameter::TemperatureMaxTwicePerDay
            | Parameter::PrecipIntensityMaxMeanPast15m => ArchiveFormat::Unsupported,
        }
    }

    /// Name of the quality column this parameter gets in a [`crate::WideTable`].
    pub fn quality_column(self) -> String {
        format!("quality_{}", self.name())
    }
}

impl TryFrom<u32> for Parameter {
    type Error = UnknownParameterId;

    /// Looks up a parameter by its SMHI id.
    ///
    /// ```
    /// use smhi::Parameter;
    ///
    /// assert_eq!(Parameter::try_from(5), Ok(Parameter::PrecipPast24hAt06));
    /// assert!(Parameter::try_from(99).is_err());
    /// ```
    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Parameter::ALL
            .iter()
            .copied()
            .find(|parameter| parameter.id() == id)
            .ok_or(UnknownParameterId(id))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
