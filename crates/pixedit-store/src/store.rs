use std::{collections::HashMap, fmt, path::Path};

use pixedit_image::Image;
use pixedit_imgproc::Operation;
use pixedit_io::functional::{self, FileFormat};

use crate::error::StoreError;

const OVERWRITE_NOTICE: &str = "Overwriting image.\n";
const LOAD_DONE: &str = "Loading completed.\n";
const EDIT_DONE: &str = "Edit completed.\n";
const SAVE_DONE: &str = "Saving completed.\n";

/// What happened to the store when an image was added.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    /// The name was free and now holds the image.
    Inserted {
        /// The name of the entry.
        name: String,
    },
    /// The name already held an image, which was replaced.
    Overwritten {
        /// The name of the entry.
        name: String,
    },
}

impl StoreEvent {
    /// The name of the entry the event refers to.
    pub fn name(&self) -> &str {
        match self {
            StoreEvent::Inserted { name } | StoreEvent::Overwritten { name } => name,
        }
    }
}

/// A mapping from names to images.
///
/// Names are unique. Status lines of the workflows, such as the notice written before an entry
/// is replaced, go to a caller provided [`fmt::Write`] sink. An operation that fails leaves
/// the store as it was, including when the sink itself fails.
///
/// The store is a plain value: callers sharing it across threads wrap it in a
/// [`std::sync::Mutex`] so that a lookup and the replacement that follows it are serialized.
///
/// # Example
///
/// ```
/// use pixedit_image::{Image, Pixel};
/// use pixedit_store::{ImageStore, StoreEvent};
///
/// let image = Image::from_rows(vec![vec![Pixel::new(1, 2, 3).unwrap()]]).unwrap();
///
/// let mut store = ImageStore::new();
/// let mut out = String::new();
///
/// store.add("koala", image.clone(), &mut out).unwrap();
/// assert!(out.is_empty());
///
/// let event = store.add("koala", image, &mut out).unwrap();
/// assert_eq!(event, StoreEvent::Overwritten { name: "koala".to_string() });
/// assert_eq!(out, "Overwriting image.\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ImageStore {
    images: HashMap<String, Image>,
}

impl ImageStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    /// Looks up the image stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if there is no such entry.
    pub fn find(&self, name: &str) -> Result<&Image, StoreError> {
        self.images
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Stores `image` under `name`.
    ///
    /// If the name is taken, `Overwriting image.` is written to the sink before the entry is
    /// replaced. A new name writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sink`] if the notice cannot be written, in which case the old
    /// entry is kept.
    pub fn add(
        &mut self,
        name: &str,
        image: Image,
        sink: &mut impl fmt::Write,
    ) -> Result<StoreEvent, StoreError> {
        self.commit(name, image, sink, None)
    }

    // replaces silently, callers announce overwrites through the sink first
    pub(crate) fn insert(&mut self, name: &str, image: Image) -> StoreEvent {
        let event = match self.images.insert(name.to_string(), image) {
            Some(_) => StoreEvent::Overwritten {
                name: name.to_string(),
            },
            None => StoreEvent::Inserted {
                name: name.to_string(),
            },
        };
        log::info!("{event:?}");
        event
    }

    /// Removes and returns the image stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Image> {
        self.images.remove(name)
    }

    /// Checks if an image is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Returns the stored names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the store holds no image.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Reads the image file at `file_path` and stores it under `name`.
    ///
    /// The codec is picked from the file extension. Writes `Loading completed.` to the sink,
    /// preceded by the overwrite notice if the name is taken.
    pub fn load(
        &mut self,
        file_path: impl AsRef<Path>,
        name: &str,
        sink: &mut impl fmt::Write,
    ) -> Result<StoreEvent, StoreError> {
        let image = functional::read_image(file_path)?;
        self.commit(name, image, sink, Some(LOAD_DONE))
    }

    /// Applies `op` to the image stored under `src` and stores the result under `dst`.
    ///
    /// `src` and `dst` may be the same name, in which case the source is replaced. Writes
    /// `Edit completed.` to the sink, preceded by the overwrite notice if `dst` is taken.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `src` is absent.
    pub fn apply(
        &mut self,
        op: &Operation,
        src: &str,
        dst: &str,
        sink: &mut impl fmt::Write,
    ) -> Result<StoreEvent, StoreError> {
        let image = op.apply(self.find(src)?)?;
        log::debug!("applied {op} to {src}");
        self.commit(dst, image, sink, Some(EDIT_DONE))
    }

    /// Writes the image stored under `name` to `file_path`.
    ///
    /// The codec is picked from the file extension. Writes `Writing to new file: <path>.`
    /// before encoding and `Saving completed.` once the file is written. An unsupported
    /// extension fails before anything is written to the sink.
    pub fn save(
        &self,
        name: &str,
        file_path: impl AsRef<Path>,
        sink: &mut impl fmt::Write,
    ) -> Result<(), StoreError> {
        let file_path = file_path.as_ref();
        let image = self.find(name)?;
        FileFormat::from_path(file_path)?;

        writeln!(sink, "Writing to new file: {}.", file_path.display())?;
        functional::write_image(file_path, image)?;
        sink.write_str(SAVE_DONE)?;

        Ok(())
    }

    // every status line is written before the map is touched, so a failing sink leaves the
    // store unchanged
    fn commit(
        &mut self,
        name: &str,
        image: Image,
        sink: &mut impl fmt::Write,
        done: Option<&str>,
    ) -> Result<StoreEvent, StoreError> {
        if self.contains(name) {
            sink.write_str(OVERWRITE_NOTICE)?;
        }
        if let Some(done) = done {
            sink.write_str(done)?;
        }

        Ok(self.insert(name, image))
    }
}
