#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const CIRCUITS: &str = "\
circuitId,circuitRef,name,location,country,lat,lng,alt,url
1,albert_park,Albert Park Grand Prix Circuit,Melbourne,Australia,-37.8497,144.968,10,http://en.wikipedia.org/wiki/Melbourne_Grand_Prix_Circuit
3,bahrain,Bahrain International Circuit,Sakhir,Bahrain,26.0325,50.5106,\\N,http://en.wikipedia.org/wiki/Bahrain_International_Circuit
7,villeneuve,Circuit Gilles Villeneuve,Montreal,Canada,45.5,-73.5228,13,http://en.wikipedia.org/wiki/Circuit_Gilles_Villeneuve
";

pub const CONSTRUCTORS: &str = "\
constructorId,constructorRef,name,nationality,url
1,mclaren,McLaren,British,http://en.wikipedia.org/wiki/McLaren
131,mercedes,Mercedes,German,http://en.wikipedia.org/wiki/Mercedes-Benz_in_Formula_One
";

pub const DRIVERS: &str = "\
driverId,driverRef,number,code,forename,surname,dob,nationality,url
1,hamilton,44,HAM,Lewis,Hamilton,1985-01-07,British,http://en.wikipedia.org/wiki/Lewis_Hamilton
356,brabham,\\N,\\N,Jack,Brabham,1926-04-02,Australian,http://en.wikipedia.org/wiki/Jack_Brabham
830,max_verstappen,33,VER,Max,Verstappen,1997-09-30,Dutch,http://en.wikipedia.org/wiki/Max_Verstappen
";

pub const SEASONS: &str = "\
year,url
2020,http://en.wikipedia.org/wiki/2020_Formula_One_World_Championship
2021,http://example.com/2021
";

pub const RACES: &str = "\
raceId,year,round,circuitId,name,date,time,url,fp1_date,fp1_time,fp2_date,fp2_time,fp3_date,fp3_time,quali_date,quali_time,sprint_date,sprint_time
1052,2021,1,3,Bahrain Grand Prix,2021-03-28,15:00:00,http://en.wikipedia.org/wiki/2021_Bahrain_Grand_Prix,\\N,\\N,\\N,\\N,\\N,\\N,\\N,\\N,\\N,\\N
1054,2021,3,1,Australian Grand Prix,2021-04-18,\\N,http://example.com/1054,\\N,\\N,\\N,\\N,\\N,\\N,\\N,\\N,\\N,\\N
1061,2021,10,7,Canadian Grand Prix,2021-07-18,14:00:00,http://example.com/1061,2021-07-16,13:30:00,2021-07-17,11:00:00,\\N,\\N,2021-07-16,17:00:00,2021-07-17,15:30:00
";

pub const STATUS: &str = "\
statusId,status
1,Finished
3,Accident
11,+1 Lap
";

pub const CONSTRUCTOR_RESULTS: &str = "\
constructorResultsId,raceId,constructorId,points,status
16000,1052,131,25,\\N
16001,1052,1,12,D
";

pub const CONSTRUCTOR_STANDINGS: &str = "\
constructorStandingsId,raceId,constructorId,points,position,positionText,wins
28000,1052,131,25,1,1,1
28001,1052,1,12,2,2,0
";

pub const DRIVER_STANDINGS: &str = "\
driverStandingsId,raceId,driverId,points,position,positionText,wins
70000,1052,1,25,1,1,1
70001,1052,830,18,2,2,0
";

pub const LAP_TIMES: &str = "\
raceId,driverId,lap,position,time,milliseconds
1052,1,1,2,1:39.000,99000
1052,1,2,2,1:36.500,96500
1052,830,1,1,1:38.500,98500
";

pub const PIT_STOPS: &str = "\
raceId,driverId,stop,lap,time,duration,milliseconds
1052,1,1,13,18:25:49,23.041,23041
1052,830,1,17,18:30:00,22.500,22500
";

pub const QUALIFYING: &str = "\
qualifyId,raceId,driverId,constructorId,number,position,q1,q2,q3
9000,1052,830,1,33,1,1:30.499,1:30.318,1:28.997
9001,1052,1,131,44,2,1:30.617,1:30.085,\\N
";

pub const RESULTS: &str = "\
resultId,raceId,driverId,constructorId,number,grid,position,positionText,positionOrder,points,laps,time,milliseconds,fastestLap,rank,fastestLapTime,fastestLapSpeed,statusId
25000,1052,1,131,44,2,1,1,1,25,56,1:32:03.897,5523897,44,4,1:34.015,207.235,1
25001,1052,830,1,33,1,\\N,R,2,0,20,\\N,\\N,\\N,\\N,\\N,\\N,3
";

pub const SPRINT_RESULTS: &str = "\
resultId,raceId,driverId,constructorId,number,grid,position,positionText,positionOrder,points,laps,time,milliseconds,fastestLap,fastestLapTime,statusId
1,1061,830,1,33,1,1,1,1,3,17,25:38.426,1538426,14,1:30.013,1
2,1061,1,131,44,2,\\N,R,2,0,10,\\N,\\N,\\N,\\N,3
";

/// (file name, contents, expected table, expected rows)
pub const DATASET: [(&str, &str, &str, u64); 14] = [
    ("circuits.csv", CIRCUITS, "circuits", 3),
    ("constructors.csv", CONSTRUCTORS, "constructors", 2),
    ("drivers.csv", DRIVERS, "drivers", 3),
    ("seasons.csv", SEASONS, "seasons", 2),
    ("races.csv", RACES, "races", 3),
    ("status.csv", STATUS, "status", 3),
    ("constructor_results.csv", CONSTRUCTOR_RESULTS, "constructor_results", 2),
    ("constructor_standings.csv", CONSTRUCTOR_STANDINGS, "constructor_standings", 2),
    ("driver_standings.csv", DRIVER_STANDINGS, "driver_standings", 2),
    ("lap_times.csv", LAP_TIMES, "lap_times", 3),
    ("pit_stops.csv", PIT_STOPS, "pit_stops", 2),
    ("qualifying.csv", QUALIFYING, "qualifying_sessions", 2),
    ("results.csv", RESULTS, "race_results", 2),
    ("sprint_results.csv", SPRINT_RESULTS, "sprint_results", 2),
];

/// Write the full fixture dataset into `<root>/csv` and return that directory
pub fn write_dataset(root: &Path) -> PathBuf {
    let csv_dir = root.join("csv");
    fs::create_dir_all(&csv_dir).unwrap();
    for (file, contents, _, _) in DATASET {
        fs::write(csv_dir.join(file), contents).unwrap();
    }
    csv_dir
}

pub fn overwrite(csv_dir: &Path, file: &str, contents: &str) {
    fs::write(csv_dir.join(file), contents).unwrap();
}
