//! Embedded Benchmark Datasets
//! Measured results of the copy-strategy study, exposed as ready-to-render figures

use crate::charts::{Annotation, Chart, Marker, Series};

/// Test-environment block stamped on every figure.
pub const SYS_CONFIG: &str = "System: Ubuntu Linux\n\
    CPU: x86_64\n\
    Transport: TCP\n\
    Topology: Client–Server (Network Namespaces)\n\
    Duration: 10 seconds";

/// Message sizes in bytes swept by the throughput, cache, and cycles runs.
const MSG_SIZES: [f64; 4] = [64.0, 256.0, 1024.0, 4096.0];
/// Worker thread counts swept by the latency run.
const THREADS: [f64; 4] = [1.0, 2.0, 4.0, 8.0];

// Throughput in Gbps at 8 worker threads.
const TP_TWO_COPY: [f64; 4] = [2.094, 8.197, 14.695, 26.937];
const TP_ONE_COPY: [f64; 4] = [4.203, 14.882, 46.837, 87.664];
const TP_ZERO_COPY: [f64; 4] = [2.081, 7.921, 28.183, 59.125];

// Average latency in microseconds at 1024-byte messages.
const LAT_TWO_COPY: [f64; 4] = [19.81, 25.855, 38.1325, 42.5787];
const LAT_ONE_COPY: [f64; 4] = [2.37, 2.995, 4.9525, 10.0062];
const LAT_ZERO_COPY: [f64; 4] = [6.7, 7.665, 12.215, 17.8813];

// L1 cache load misses at 4 worker threads.
const L1_TWO_COPY: [f64; 4] = [418_908_149.0, 927_880_771.0, 1_272_117_176.0, 1_897_313_140.0];
const L1_ONE_COPY: [f64; 4] = [193_395_214.0, 682_731_315.0, 2_390_065_876.0, 5_776_038_566.0];
const L1_ZERO_COPY: [f64; 4] = [1_020_294_305.0, 1_446_446_362.0, 1_977_927_797.0, 4_046_909_689.0];

// CPU cycles spent per payload byte at 4 worker threads.
const CPB_TWO_COPY: [f64; 4] = [5.968, 2.716, 1.553, 0.786];
const CPB_ONE_COPY: [f64; 4] = [0.913, 0.275, 0.116, 0.093];
const CPB_ZERO_COPY: [f64; 4] = [4.503, 2.009, 0.546, 0.212];

/// The three copy strategies in presentation order, with the markers the
/// study uses for them throughout.
fn variant_series(two_copy: &[f64], one_copy: &[f64], zero_copy: &[f64]) -> [Series; 3] {
    [
        Series::new("A1 (two-copy)", Marker::Circle, two_copy.to_vec()),
        Series::new("A2 (one-copy)", Marker::Square, one_copy.to_vec()),
        Series::new("A3 (zero-copy)", Marker::Triangle, zero_copy.to_vec()),
    ]
}

fn figure(
    title: &str,
    x_label: &str,
    y_label: &str,
    x_values: &[f64],
    series: [Series; 3],
    anchor: &str,
) -> Chart {
    let mut chart = Chart::new(title, x_label, y_label, x_values.to_vec());
    for s in series {
        chart.add_series(s);
    }
    chart.set_annotation(Annotation::new(SYS_CONFIG, anchor));
    chart
}

/// Throughput vs message size at eight worker threads.
pub fn throughput() -> Chart {
    figure(
        "Throughput vs Message Size (Threads = 8)",
        "Message Size (bytes)",
        "Throughput (Gbps)",
        &MSG_SIZES,
        variant_series(&TP_TWO_COPY, &TP_ONE_COPY, &TP_ZERO_COPY),
        "bottom-right",
    )
}

/// Average latency vs thread count at 1024-byte messages.
pub fn latency() -> Chart {
    figure(
        "Latency vs Thread Count (Message Size = 1024 bytes)",
        "Thread Count",
        "Average Latency (µs)",
        &THREADS,
        variant_series(&LAT_TWO_COPY, &LAT_ONE_COPY, &LAT_ZERO_COPY),
        "center",
    )
}

/// L1 cache load misses vs message size at four worker threads.
pub fn cache_misses() -> Chart {
    figure(
        "L1 Cache Misses vs Message Size (Threads = 4)",
        "Message Size (bytes)",
        "L1 Cache Load Misses",
        &MSG_SIZES,
        variant_series(&L1_TWO_COPY, &L1_ONE_COPY, &L1_ZERO_COPY),
        "bottom-right",
    )
}

/// CPU cycles per payload byte vs message size at four worker threads.
pub fn cycles_per_byte() -> Chart {
    figure(
        "CPU Cycles per Byte vs Message Size (Threads = 4)",
        "Message Size (bytes)",
        "CPU Cycles per Byte",
        &MSG_SIZES,
        variant_series(&CPB_TWO_COPY, &CPB_ONE_COPY, &CPB_ZERO_COPY),
        "top-center",
    )
}

/// All figures of the study in display order.
pub fn all() -> Vec<Chart> {
    vec![throughput(), latency(), cache_misses(), cycles_per_byte()]
}
