/// Writes a view of the school data somewhere.
pub trait ExportProvider {
    type ExportType;

    fn export(&self) -> Self::ExportType;
}
