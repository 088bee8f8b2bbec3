/*!
# Rotating File Sink
Appends log lines to a file and rolls over to numbered files by size.

Each line looks like `[dd.MM.yyyy HH:mm:ss] [<level>] - <message>`, with the time in UTC. Once the
current file has reached the maximum size, the next line goes to the lowest-numbered
`<base>_<N><ext>` which does not exist yet, in the same folder. The un-suffixed base file is
always the first file used.

## Example

```rust
use rotating_file_sink::*;

use std::fs;
use std::path::Path;

let test_folder = Path::new("tests").join("out").join("sink-example");

let _ = fs::remove_dir_all(&test_folder);

let mut builder = SinkConfig::builder(test_folder.join("app.log"));

builder.set_max_file_size(100).set_minimum_level(LogLevel::Information);

let provider = RotatingFileSinkProvider::new(builder.build().unwrap());

{
    let sink = provider.create_sink("orders").unwrap();

    sink.append(&LogEvent::new(LogLevel::Debug, "orders", "Ignored.")).unwrap();

    sink.append(&LogEvent::new(LogLevel::Information, "orders", "Order received.")).unwrap();
    sink.append(&LogEvent::new(LogLevel::Warning, "orders", "Order delayed.")).unwrap();

    // both lines are in `app.log`, which is now over 100 bytes
    sink.append(&LogEvent::new(LogLevel::Information, "orders", "Order shipped.")).unwrap();

    assert_eq!(provider.config().directory().join("app_0.log"), sink.current_file_path());
}

fs::remove_dir_all(test_folder).unwrap();
```

To route the `log` macros into rotating files, build a `FileLogger` around a provider and
`install` it, or call `init` with a `SinkConfig`.
*/

mod config;
mod console;
mod log_level;
mod logger;
mod provider;
pub mod roll;
mod sink;

pub use config::*;
pub use console::*;
pub use log_level::*;
pub use logger::*;
pub use provider::*;
pub use sink::*;
