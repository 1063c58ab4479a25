//! Drives the segment closure with a bisection solver.
//!
//! The unknown is the feed-side membrane wall temperature. For a given wall
//! temperature the feed convects `h·(T_bulk − T_wall)` to the membrane and the
//! closure reports the heat flux `q` leaving through it. The residual
//! `h·(T_bulk − T_wall) − q` is positive near the cold side and negative at
//! the bulk temperature, so bisection brackets the balance.

use std::convert::Infallible;

use agmd_models::{
    models::desalination::agmd::{
        DesignConfig, ModuleDesign, OperatingState, SegmentClosure, SegmentResult, StreamState,
    },
    support::properties::{ConstantProperties, ConstantPropertiesParameters},
};
use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{MassRate, Pressure, Ratio, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    mass_flux::kilogram_per_square_meter_second,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    ratio::percent,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

const DESIGN: &str = r"
    [feed]
    height = 0.002
    width = 0.3
    channels = 1
    spacer_porosity = 0.85

    [coolant]
    height = 0.0015
    width = 0.3
    channels = 1
    spacer_porosity = 0.9

    [membrane]
    porosity = 0.8
    tortuosity = 1.5
    thickness = 1e-4
    pore_diameter = 2e-7
    polymer_conductivity = 0.2

    [air_gap]
    thickness = 0.002
";

const FEED_BULK_CELSIUS: f64 = 70.0;
const MEMBRANE_GAP_CELSIUS: f64 = 45.0;
const GAP_CELSIUS: f64 = 40.0;
const FILM_CELSIUS: f64 = 35.0;

/// Saturation pressure of water from the Antoine equation (1–100 °C).
fn saturation_pressure(celsius: f64) -> Pressure {
    let mmhg = 10_f64.powf(8.071_31 - 1_730.63 / (233.426 + celsius));
    Pressure::new::<pascal>(mmhg * 133.322)
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

fn design() -> ModuleDesign {
    DesignConfig::from_toml_str(DESIGN)
        .and_then(DesignConfig::into_design)
        .expect("design is valid")
}

fn properties() -> ConstantProperties {
    ConstantProperties::new(ConstantPropertiesParameters::warm_seawater())
        .expect("warm seawater parameters are valid")
}

/// Segment state for a trial feed wall temperature.
fn state_at(wall_celsius: f64) -> OperatingState {
    OperatingState {
        feed: StreamState {
            mass_flow_rate: MassRate::new::<kilogram_per_second>(0.1),
            bulk_temperature: celsius(FEED_BULK_CELSIUS),
            wall_temperature: celsius(wall_celsius),
            bulk_salinity: Ratio::new::<percent>(3.5),
            wall_salinity: Ratio::new::<percent>(3.5),
        },
        coolant: StreamState {
            mass_flow_rate: MassRate::new::<kilogram_per_second>(0.1),
            bulk_temperature: celsius(25.0),
            wall_temperature: celsius(30.0),
            bulk_salinity: Ratio::new::<percent>(0.0),
            wall_salinity: Ratio::new::<percent>(0.0),
        },
        membrane_temperature: celsius(0.5 * (wall_celsius + MEMBRANE_GAP_CELSIUS)),
        membrane_gap_temperature: celsius(MEMBRANE_GAP_CELSIUS),
        gap_temperature: celsius(GAP_CELSIUS),
        feed_vapor_pressure: saturation_pressure(wall_celsius),
        boundary_vapor_pressure: saturation_pressure(FILM_CELSIUS),
        vacuum_pressure: Pressure::new::<pascal>(-81_325.0),
    }
}

struct WallBalance;

impl EquationProblem<1> for WallBalance {
    type Input = OperatingState;
    type Output = SegmentResult;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        let wall = ThermodynamicTemperature::new::<kelvin>(x[0]);
        Ok(state_at(wall.get::<degree_celsius>()))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let h = output.feed.heat_transfer.get::<watt_per_square_meter_kelvin>();
        let drop = input.feed.bulk_temperature.get::<kelvin>()
            - input.feed.wall_temperature.get::<kelvin>();
        let q = output.flux.heat_flux.get::<watt_per_square_meter>();
        Ok([h * drop - q])
    }
}

#[test]
fn bisection_balances_feed_convection_and_membrane_heat_flux() {
    let design = design();
    let properties = properties();
    let closure = SegmentClosure::new(&design, &properties, &properties);

    let config = bisection::Config {
        max_iters: 200,
        x_abs_tol: 1e-10,
        x_rel_tol: 0.0,
        residual_tol: 1e-6,
    };

    let solution = bisection::solve(
        &closure,
        &WallBalance,
        [
            celsius(MEMBRANE_GAP_CELSIUS + 0.5).get::<kelvin>(),
            celsius(FEED_BULK_CELSIUS).get::<kelvin>(),
        ],
        &config,
        |event: &bisection::Event<'_, _, _>| {
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )
    .expect("bisection runs");

    assert_eq!(solution.status, bisection::Status::Converged);

    let result = solution.snapshot.output;
    assert!(result.flux.mass_flux.get::<kilogram_per_square_meter_second>() > 0.0);
    assert!(result.flux.heat_flux.get::<watt_per_square_meter>() > 0.0);
    assert!(result.interfacial_salinity > Ratio::new::<percent>(3.5));
}

#[test]
fn residual_changes_sign_across_the_bracket() {
    let design = design();
    let properties = properties();
    let closure = SegmentClosure::new(&design, &properties, &properties);

    let residual = |wall_celsius: f64| {
        let input = WallBalance
            .input(&[celsius(wall_celsius).get::<kelvin>()])
            .expect("input is infallible");
        let output = closure.call(&input).expect("segment evaluates");
        WallBalance
            .residuals(&input, &output)
            .expect("residual is infallible")[0]
    };

    assert!(residual(MEMBRANE_GAP_CELSIUS + 0.5) > 0.0);
    assert!(residual(FEED_BULK_CELSIUS) < 0.0);
}
