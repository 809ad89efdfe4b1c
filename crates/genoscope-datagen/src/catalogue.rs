//! Fixed symbol/name catalogue the generator draws from.

/// (symbol, name) pairs. Draws are without replacement, so this also
/// caps the corpus size.
pub const GENE_CATALOGUE: &[(&str, &str)] = &[
    ("BRCA1", "Breast cancer type 1 susceptibility protein"),
    ("TP53", "Cellular tumor antigen p53"),
    ("KRAS", "GTPase KRas"),
    ("EGFR", "Epidermal growth factor receptor"),
    ("HER2", "Receptor tyrosine-protein kinase erbB-2"),
    (
        "PTEN",
        "Phosphatidylinositol 3,4,5-trisphosphate 3-phosphatase and dual-specificity protein phosphatase PTEN",
    ),
    ("AKT1", "RAC-alpha serine/threonine-protein kinase"),
    (
        "PIK3CA",
        "Phosphatidylinositol 4,5-bisphosphate 3-kinase catalytic subunit alpha isoform",
    ),
    ("BRAF", "Serine/threonine-protein kinase B-raf"),
    ("VEGFA", "Vascular endothelial growth factor A"),
    ("MDM2", "E3 ubiquitin-protein ligase Mdm2"),
    ("CDKN2A", "Cyclin-dependent kinase inhibitor 2A"),
    ("MTOR", "Serine/threonine-protein kinase mTOR"),
    ("JAK2", "Tyrosine-protein kinase JAK2"),
    ("STAT3", "Signal transducer and activator of transcription 3"),
    ("MYC", "Myc proto-oncogene protein"),
    ("PD1", "Programmed cell death protein 1"),
    ("PDL1", "Programmed cell death 1 ligand 1"),
    ("CTLA4", "Cytotoxic T-lymphocyte protein 4"),
    ("CD19", "B-lymphocyte antigen CD19"),
    ("TNF", "Tumor necrosis factor"),
    ("IL6", "Interleukin-6"),
    ("IL1B", "Interleukin-1 beta"),
    ("CXCR4", "C-X-C chemokine receptor type 4"),
    ("CCR5", "C-C chemokine receptor type 5"),
    ("MAPK1", "Mitogen-activated protein kinase 1"),
    ("IGF1R", "Insulin-like growth factor 1 receptor"),
    ("FGFR1", "Fibroblast growth factor receptor 1"),
    ("ERBB3", "Receptor tyrosine-protein kinase erbB-3"),
    ("MET", "Hepatocyte growth factor receptor"),
    ("ALK", "ALK tyrosine kinase receptor"),
    ("ROS1", "Proto-oncogene tyrosine-protein kinase ROS"),
    ("RET", "Proto-oncogene tyrosine-protein kinase receptor Ret"),
    ("KIT", "Mast/stem cell growth factor receptor Kit"),
    ("NOTCH1", "Neurogenic locus notch homolog protein 1"),
    ("WNT1", "Proto-oncogene Wnt-1"),
    ("GLI1", "Zinc finger protein GLI1"),
    ("HDAC1", "Histone deacetylase 1"),
    ("EZH2", "Enhancer of zeste homolog 2"),
    ("PARP1", "Poly [ADP-ribose] polymerase 1"),
    ("ATM", "Serine-protein kinase ATM"),
    ("BRCA2", "Breast cancer type 2 susceptibility protein"),
    ("CDK4", "Cyclin-dependent kinase 4"),
    ("CDK6", "Cyclin-dependent kinase 6"),
    ("BTK", "Tyrosine-protein kinase BTK"),
    ("BCL2", "Apoptosis regulator Bcl-2"),
    ("MCL1", "Induced myeloid leukemia cell differentiation protein Mcl-1"),
    ("SOX2", "Transcription factor SOX-2"),
    ("OCT4", "POU domain, class 5, transcription factor 1"),
];

/// Number of genes available to draw.
pub fn catalogue_len() -> usize {
    GENE_CATALOGUE.len()
}
