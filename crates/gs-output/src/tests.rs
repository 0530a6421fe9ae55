//! Unit and integration tests for gs-output.

#[cfg(test)]
mod helpers {
    use std::collections::BTreeMap;
    use std::time::{Duration, Instant};

    use gs_core::{
        Car, CarConfig, CarId, FuelType, MillisRange, RegisterConfig, RegisterId, SimConfig,
        StageRecord, StationConfig, StationId,
    };

    /// A car that has cleared both stages with the given service times and
    /// queue waits (milliseconds).
    pub fn completed_car(
        id:          u32,
        fuel:        FuelType,
        station_ms:  (u64, u64),
        register_ms: (u64, u64),
    ) -> Car {
        let t0 = Instant::now();
        let stage = |arrived: Instant, (wait, service): (u64, u64)| {
            let started = arrived + Duration::from_millis(wait);
            StageRecord {
                arrived_at: arrived,
                started_at: started,
                ended_at:   started + Duration::from_millis(service),
                service:    Duration::from_millis(service),
            }
        };
        let station = stage(t0, station_ms);
        let register = stage(station.ended_at, register_ms);

        let mut car = Car::new(CarId(id), fuel, t0);
        car.station_id = StationId(id % 2);
        car.register_id = RegisterId(0);
        car.station = Some(station);
        car.register = Some(register);
        car
    }

    pub fn config(cars: u32, stations: &[(FuelType, u32, MillisRange)], registers: u32) -> SimConfig {
        SimConfig::new(
            CarConfig { count: cars, arrival: MillisRange::fixed(1) },
            stations
                .iter()
                .map(|&(fuel, count, service)| (fuel, StationConfig { count, service }))
                .collect::<BTreeMap<_, _>>(),
            RegisterConfig { count: registers, handle: MillisRange::fixed(2) },
        )
    }
}

#[cfg(test)]
mod row_tests {
    use gs_core::{Car, CarId, FuelType, TimingMode};
    use gs_stats::StatsAggregator;
    use std::time::Instant;

    use super::helpers::completed_car;
    use crate::row::{CarRow, SummaryRow};

    #[test]
    fn car_row_service_only() {
        let car = completed_car(3, FuelType::Diesel, (4, 10), (1, 5));
        let row = CarRow::from_car(&car, TimingMode::ServiceOnly).unwrap();
        assert_eq!(row.car_id, 3);
        assert_eq!(row.fuel, "diesel");
        assert_eq!(row.station_id, 1);
        assert_eq!(row.station_wait_us, 4_000);
        assert_eq!(row.station_service_us, 10_000);
        assert_eq!(row.register_wait_us, 1_000);
        assert_eq!(row.register_service_us, 5_000);
        assert_eq!(row.total_us, 15_000);
    }

    #[test]
    fn car_row_includes_queue_wait() {
        let car = completed_car(0, FuelType::Gas, (4, 10), (1, 5));
        let row = CarRow::from_car(&car, TimingMode::IncludeQueueWait).unwrap();
        assert_eq!(row.total_us, 20_000);
    }

    #[test]
    fn car_row_requires_both_stages() {
        let car = Car::new(CarId(1), FuelType::Lpg, Instant::now());
        assert!(CarRow::from_car(&car, TimingMode::ServiceOnly).is_none());
    }

    #[test]
    fn summary_rows_cover_every_key() {
        let stats = StatsAggregator::new(TimingMode::ServiceOnly);
        stats.record(&completed_car(0, FuelType::Gas, (0, 10), (0, 5))).unwrap();
        stats.record(&completed_car(1, FuelType::Gas, (0, 20), (0, 5))).unwrap();

        let rows = SummaryRow::from_report(&stats.finalize());
        let keys: Vec<_> = rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, ["gas", "diesel", "lpg", "electric", "registers"]);

        assert_eq!(rows[0].total_cars, 2);
        assert_eq!(rows[0].total_time_us, 30_000);
        assert_eq!(rows[0].average_us, Some(15_000));
        assert_eq!(rows[0].max_us, 20_000);
        assert_eq!(rows[1].average_us, None);
        assert_eq!(rows[4].total_cars, 2);
        assert_eq!(rows[4].total_time_us, 10_000);
    }
}

#[cfg(test)]
mod csv_tests {
    use gs_core::{FuelType, TimingMode};
    use gs_stats::StatsAggregator;
    use tempfile::TempDir;

    use super::helpers::completed_car;
    use crate::csv::{CAR_HEADERS, CsvWriter, SUMMARY_HEADERS};
    use crate::row::{CarRow, SummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = ::csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("cars.csv").exists());
        assert!(dir.path().join("summary.csv").exists());
    }

    #[test]
    fn csv_creates_missing_dir() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let mut w = CsvWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join("cars.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(&dir.path().join("cars.csv")), CAR_HEADERS);
        assert_eq!(headers(&dir.path().join("summary.csv")), SUMMARY_HEADERS);
    }

    #[test]
    fn csv_car_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for i in 0..3 {
            let car = completed_car(i, FuelType::Electric, (0, 10), (0, 5));
            w.write_car(&CarRow::from_car(&car, TimingMode::ServiceOnly).unwrap()).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = ::csv::Reader::from_path(dir.path().join("cars.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[2][0], "2");
        assert_eq!(&records[2][1], "electric");
        assert_eq!(&records[2][8], "15000");
    }

    #[test]
    fn csv_summary_no_data_is_empty_field() {
        let dir = tmp();
        let stats = StatsAggregator::new(TimingMode::ServiceOnly);
        stats.record(&completed_car(0, FuelType::Gas, (0, 10), (0, 5))).unwrap();

        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&SummaryRow::from_report(&stats.finalize())).unwrap();
        w.finish().unwrap();

        let mut rdr = ::csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 5);
        assert_eq!(&records[0][3], "10000");
        assert_eq!(&records[1][0], "diesel");
        assert_eq!(&records[1][1], "0");
        assert_eq!(&records[1][3], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use gs_core::{Car, CarId, FuelType, MillisRange, TimingMode};
    use gs_sim::{SimBuilder, SimObserver};
    use gs_stats::StatsAggregator;
    use std::time::Instant;
    use tempfile::TempDir;

    use super::helpers::{completed_car, config};
    use crate::observer::SimOutputObserver;
    use crate::row::{CarRow, SummaryRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult};

    /// In-memory writer; fails every write once `fail` is set.
    #[derive(Default)]
    struct MemWriter {
        cars:     Vec<CarRow>,
        summary:  Vec<SummaryRow>,
        finished: u32,
        fail:     bool,
    }

    impl OutputWriter for MemWriter {
        fn write_car(&mut self, row: &CarRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.cars.push(row.clone());
            Ok(())
        }

        fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
            self.summary.extend_from_slice(rows);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn observer_writes_cars_and_summary() {
        let mut obs = SimOutputObserver::new(MemWriter::default(), TimingMode::ServiceOnly);
        let stats = StatsAggregator::new(TimingMode::ServiceOnly);
        for i in 0..4 {
            let car = completed_car(i, FuelType::Gas, (0, 10), (0, 5));
            stats.record(&car).unwrap();
            obs.on_car_completed(&car);
        }
        obs.on_sim_end(&stats.finalize());

        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 4);
        let w = obs.into_writer();
        assert_eq!(w.cars.len(), 4);
        assert_eq!(w.summary.len(), 5);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn observer_skips_incomplete_car() {
        let mut obs = SimOutputObserver::new(MemWriter::default(), TimingMode::ServiceOnly);
        obs.on_car_completed(&Car::new(CarId(0), FuelType::Gas, Instant::now()));
        assert_eq!(obs.rows_written(), 0);
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn observer_keeps_first_error() {
        let writer = MemWriter { fail: true, ..MemWriter::default() };
        let mut obs = SimOutputObserver::new(writer, TimingMode::ServiceOnly);
        obs.on_car_completed(&completed_car(0, FuelType::Gas, (0, 1), (0, 1)));
        obs.on_car_completed(&completed_car(1, FuelType::Gas, (0, 1), (0, 1)));

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 0);
    }

    #[test]
    fn integration_csv() {
        let dir = TempDir::new().unwrap();
        let stations: Vec<_> =
            FuelType::ALL.into_iter().map(|fuel| (fuel, 1, MillisRange::fixed(3))).collect();
        let cfg = config(8, &stations, 2);
        let mut sim = SimBuilder::new(cfg).seed(11).build().unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, sim.config.timing);
        let report = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 8);
        drop(obs);

        let mut rdr = ::csv::Reader::from_path(dir.path().join("cars.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 8);
        for r in &rows {
            assert!(r[1].parse::<FuelType>().is_ok());
            assert_eq!(&r[8], "5000");
        }

        let mut rdr = ::csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let summary: Vec<_> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(summary.len(), 5);
        assert_eq!(&summary[4][0], "registers");
        assert_eq!(summary[4][1].parse::<u64>().unwrap(), report.registers.total_cars);
        assert_eq!(report.registers.total_cars, 8);
    }
}

#[cfg(test)]
mod report_tests {
    use gs_core::{FuelType, MillisRange, TimingMode};
    use gs_stats::StatsAggregator;

    use super::helpers::{completed_car, config};
    use crate::report::{render_config, render_report};

    #[test]
    fn config_dump_lists_every_section() {
        let cfg = config(5, &[(FuelType::Diesel, 3, MillisRange::new(2, 9))], 1);
        let text = render_config(&cfg);
        assert!(text.starts_with("GAS STATION CONFIGURATION\n"));
        assert!(text.contains("  Count: 5"));
        assert!(text.contains("  diesel: 3 station(s)"));
        assert!(text.contains("    Serve Time: [2ms, 9ms]"));
        assert!(text.contains("  Handle Time: [2ms, 2ms]"));
        assert!(text.contains("Seed: 42"));
        assert!(text.contains("Queue Capacity: 20"));
        assert!(!text.contains("gas:"));
    }

    #[test]
    fn report_prints_no_data_for_empty_keys() {
        let stats = StatsAggregator::new(TimingMode::ServiceOnly);
        stats.record(&completed_car(0, FuelType::Gas, (0, 10), (0, 5))).unwrap();
        stats.record(&completed_car(1, FuelType::Gas, (0, 20), (0, 5))).unwrap();
        let text = render_report(&stats.finalize());

        assert!(text.contains(
            "gas       - Total Cars: 2, Total Time: 30.000ms, Avg Time: 15.000ms, Max Time: 20.000ms"
        ));
        assert!(text.contains("diesel    - no data"));
        assert!(text.contains("electric  - no data"));
        assert!(text.contains("registers - Total Cars: 2, Total Time: 10.000ms"));
    }

    #[test]
    fn report_with_no_cars() {
        let text = render_report(&StatsAggregator::new(TimingMode::IncludeQueueWait).finalize());
        assert_eq!(text.matches("no data").count(), 5);
        assert!(text.contains("Timing: service + queue wait"));
    }
}
