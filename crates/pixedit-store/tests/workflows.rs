use std::sync::Mutex;

use pixedit_image::{Image, Pixel};
use pixedit_imgproc::{
    color::TransformKind, filter::FilterKind, flip::FlipDirection, Operation,
};
use pixedit_io::functional::write_image;
use pixedit_store::{ImageStore, StoreError, StoreEvent};

fn scenario_image() -> Result<Image, StoreError> {
    let px = Pixel::new;
    Ok(Image::from_rows(vec![
        vec![px(0, 0, 0)?, px(255, 255, 255)?, px(122, 123, 122)?],
        vec![px(100, 5, 5)?, px(5, 100, 5)?, px(5, 5, 100)?],
        vec![px(255, 5, 5)?, px(5, 255, 5)?, px(5, 5, 255)?],
    ])?)
}

#[test]
fn scenario_edits() -> Result<(), StoreError> {
    let mut store = ImageStore::new();
    let mut out = String::new();
    store.add("koala", scenario_image()?, &mut out)?;

    let ops = [
        ("koala-h", Operation::Flip(FlipDirection::Horizontal)),
        ("koala-v", Operation::Flip(FlipDirection::Vertical)),
        ("koala-bright", Operation::Brighten(10)),
        ("koala-red", Operation::Transform(TransformKind::Red)),
    ];
    for (dst, op) in &ops {
        store.apply(op, "koala", dst, &mut out)?;
    }
    assert_eq!(out, "Edit completed.\n".repeat(ops.len()));

    let h = store.find("koala-h")?;
    assert_eq!(
        h.row(0)?,
        &[
            Pixel::new(122, 123, 122)?,
            Pixel::new(255, 255, 255)?,
            Pixel::new(0, 0, 0)?
        ]
    );

    let v = store.find("koala-v")?;
    assert_eq!(
        v.row(0)?,
        &[
            Pixel::new(255, 5, 5)?,
            Pixel::new(5, 255, 5)?,
            Pixel::new(5, 5, 255)?
        ]
    );

    let bright = store.find("koala-bright")?;
    assert_eq!(bright.pixel_at(0, 0)?.channels(), [10, 10, 10]);
    assert_eq!(bright.pixel_at(0, 1)?.channels(), [255, 255, 255]);

    let red = store.find("koala-red")?;
    assert_eq!(red.pixel_at(1, 0)?.channels(), [100, 100, 100]);

    // the source entry is never modified
    assert_eq!(store.find("koala")?, &scenario_image()?);
    Ok(())
}

#[test]
fn load_edit_save_session() -> Result<(), StoreError> {
    let tmp_dir = tempfile::tempdir().map_err(pixedit_io::IoError::from)?;
    let input = tmp_dir.path().join("koala.ppm");
    let output = tmp_dir.path().join("koala-blur.png");
    write_image(&input, &scenario_image()?)?;

    let mut store = ImageStore::new();
    let mut out = String::new();

    store.load(&input, "koala", &mut out)?;
    let blur = Operation::Filter(FilterKind::Blur);
    store.apply(&blur, "koala", "koala", &mut out)?;
    store.save("koala", &output, &mut out)?;

    let expected = format!(
        "Loading completed.\nOverwriting image.\nEdit completed.\nWriting to new file: {}.\nSaving completed.\n",
        output.display()
    );
    assert_eq!(out, expected);

    // load the saved file back under a new name
    out.clear();
    let event = store.load(&output, "koala-back", &mut out)?;
    assert_eq!(
        event,
        StoreEvent::Inserted {
            name: "koala-back".to_string()
        }
    );
    assert_eq!(store.find("koala-back")?, store.find("koala")?);
    Ok(())
}

#[test]
fn failed_save_reports_io_error() -> Result<(), StoreError> {
    let tmp_dir = tempfile::tempdir().map_err(pixedit_io::IoError::from)?;
    let mut store = ImageStore::new();
    let mut out = String::new();
    store.add("koala", scenario_image()?, &mut out)?;

    let xyz_path = tmp_dir.path().join("koala.xyz");
    let res = store.save("koala", &xyz_path, &mut out);
    assert!(matches!(res, Err(StoreError::Io(ref e)) if e.is_unsupported_format()));
    assert!(!xyz_path.exists());
    assert!(out.is_empty());

    let res = store.save("nope", tmp_dir.path().join("nope.ppm"), &mut out);
    assert!(matches!(res, Err(StoreError::NotFound(_))));
    Ok(())
}

#[test]
fn shared_store_behind_mutex() -> Result<(), StoreError> {
    let store = Mutex::new(ImageStore::new());
    let image = scenario_image()?;

    let logs: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let mut out = String::new();
                    if let Ok(mut store) = store.lock() {
                        let _ = store.add("shared", image.clone(), &mut out);
                    }
                    out
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect()
    });

    // exactly one writer found the name free
    let inserts = logs.iter().filter(|l| l.is_empty()).count();
    assert_eq!(inserts, 1);
    assert!(logs
        .iter()
        .filter(|l| !l.is_empty())
        .all(|l| l == "Overwriting image.\n"));
    assert_eq!(store.lock().map(|s| s.len()).unwrap_or(0), 1);
    Ok(())
}
