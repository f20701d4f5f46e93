use std::path::{Path, PathBuf};

use crate::models::SourceDescriptor;

/// Known source datasets, keyed by the dialect that parses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    TreeRing,
    IceCore,
    Speleothem,
    GrainSize,
    Gistemp,
    Co2,
    SeaLevel,
}

impl Dialect {
    pub fn all() -> [Dialect; 7] {
        [
            Dialect::TreeRing,
            Dialect::IceCore,
            Dialect::Speleothem,
            Dialect::GrainSize,
            Dialect::Gistemp,
            Dialect::Co2,
            Dialect::SeaLevel,
        ]
    }

    pub fn descriptor(&self) -> SourceDescriptor {
        match self {
            Dialect::TreeRing => SourceDescriptor {
                short_name: "ITRDB_CANA426",
                dataset_type: "Tree Ring Width (mm)",
                file_name: "cana426-rwl-noaa.txt",
                source_url: "https://www.ncei.noaa.gov/pub/data/paleo/treering/measurements/northamerica/canada/cana426-rwl-noaa.txt",
                dataset_doi: None,
                citation_body: "NOAA NCEI WDS Paleoclimatology: Tree Ring Measurements CANA426.",
                citation_guidelines_url: Some("https://www.ncei.noaa.gov/access/paleo-search/citation"),
            },
            Dialect::IceCore => SourceDescriptor {
                short_name: "NGRIP_Holocene_20yr",
                dataset_type: "Ice Core δ18O (‰)",
                file_name: "vinther2006-gicc05-holocene-ngrip-20yr-noaa.txt",
                source_url: "https://www.ncei.noaa.gov/pub/data/paleo/icecore/greenland/summit/ngrip/vinther2006-gicc05-holocene-ngrip-20yr-noaa.txt",
                dataset_doi: Some("10.25921/pnba-f878"),
                citation_body: "NOAA NCEI WDS Paleoclimatology: NGRIP Holocene δ18O (20 yr). DOI 10.25921/pnba-f878.",
                citation_guidelines_url: Some("https://www.ncei.noaa.gov/access/paleo-search/citation"),
            },
            Dialect::Speleothem => SourceDescriptor {
                short_name: "Xianglong_XL16",
                dataset_type: "Speleothem Growth Rate (mm/yr)",
                file_name: "xianglong2018-xl16-noaa.txt",
                source_url: "https://www.ncei.noaa.gov/pub/data/paleo/speleothem/asia/china/xianglong2018-xl16-noaa.txt",
                dataset_doi: Some("10.25921/8d0j-jt40"),
                citation_body: "NOAA NCEI WDS Paleoclimatology: Xianglong Cave XL-16 growth rate. DOI 10.25921/8d0j-jt40.",
                citation_guidelines_url: Some("https://www.ncei.noaa.gov/access/paleo-search/citation"),
            },
            Dialect::GrainSize => SourceDescriptor {
                short_name: "LakeWalker_D50",
                dataset_type: "Grain Size D50 (µm)",
                file_name: "walker2021gs.txt",
                source_url: "https://www.ncei.noaa.gov/pub/data/paleo/paleolimnology/northamerica/canada/pq/walker2021gs.txt",
                dataset_doi: Some("10.25921/9y0x-m754"),
                citation_body: "NOAA NCEI WDS Paleoclimatology: Lake Walker grain size D50. DOI 10.25921/9y0x-m754.",
                citation_guidelines_url: Some("https://www.ncei.noaa.gov/access/paleo-search/citation"),
            },
            Dialect::Gistemp => SourceDescriptor {
                short_name: "GISTEMP_v4",
                dataset_type: "Temperature (Anomaly)",
                file_name: "gistemp_glb_ts_dsst.csv",
                source_url: "https://data.giss.nasa.gov/gistemp/",
                dataset_doi: None,
                citation_body: "GISTEMP Team: GISS Surface Temperature Analysis (GISTEMP v4), NASA GISS.",
                citation_guidelines_url: Some("https://data.giss.nasa.gov/gistemp/faq/"),
            },
            Dialect::Co2 => SourceDescriptor {
                short_name: "NOAA_MaunaLoa_CO2_monthly",
                dataset_type: "CO₂ (ppm, monthly)",
                file_name: "noaa_mauna_loa_co2_monthly.csv",
                source_url: "https://gml.noaa.gov/ccgg/trends/",
                dataset_doi: None,
                citation_body: "NOAA Global Monitoring Laboratory (GML): Mauna Loa CO₂ monthly average.",
                citation_guidelines_url: Some("https://gml.noaa.gov/ccgg/trends/"),
            },
            Dialect::SeaLevel => SourceDescriptor {
                short_name: "GMSL_ASCII_V52",
                dataset_type: "Sea Level (mm)",
                file_name: "nasa_gmsl_ascii.txt",
                source_url: "https://archive.podaac.earthdata.nasa.gov/podaac-ops-cumulus/Protected/MERGED_TP_J1_OSTM_OST_GMSL_ASCII_V52/merged_global_sea_level_v5.2.txt",
                dataset_doi: Some("10.5067/GMSLM-TJ152"),
                citation_body: "NOAA/NASA PO.DAAC: Merged Global Mean Sea Level V5.2 (ASCII). DOI 10.5067/GMSLM-TJ152.",
                citation_guidelines_url: Some("https://podaac.jpl.nasa.gov/"),
            },
        }
    }

    /// Local path of this dialect's raw file under the data directory.
    pub fn input_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.descriptor().file_name)
    }
}

/// Site labels for the multi-location proxy tables
pub const SPELEOTHEM_SITE: &str = "Xianglong XL-16";
pub const GRAIN_SIZE_SITE: &str = "Lake Walker";
